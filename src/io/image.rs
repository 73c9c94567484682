//! PNG rendering of solved boards

use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

use crate::algorithm::solver::SolverResult;
use crate::io::configuration::{
    BACKGROUND_COLOR, LOCKED_COLOR, OPEN_COLOR, PNG_CELL_GAP, PNG_CELL_PIXELS, SPOT_COLOR,
};
use crate::io::error::{Result, SolverError, file_system};
use crate::spatial::Grid;

/// Fill colour for one board cell
///
/// Every cell of a placement footprint takes the placement colour, not just
/// its top-left anchor.
pub fn cell_color(grid: &Grid, result: &SolverResult, index: usize) -> [u8; 3] {
    if result.covers(grid, index) {
        SPOT_COLOR
    } else if let Some(item) = result.layout.get(&index) {
        item.color
    } else if grid.is_available(index) {
        OPEN_COLOR
    } else {
        LOCKED_COLOR
    }
}

/// Render a solution as an image, one square per board cell
pub fn render_solution(grid: &Grid, result: &SolverResult) -> RgbImage {
    let pitch = PNG_CELL_PIXELS + PNG_CELL_GAP;
    let width = grid.width() as u32 * pitch + PNG_CELL_GAP;
    let height = grid.height() as u32 * pitch + PNG_CELL_GAP;
    let mut img = ImageBuffer::from_pixel(width, height, Rgb(BACKGROUND_COLOR));

    for index in 0..grid.len() {
        let Some((x, y)) = grid.coordinates(index) else {
            continue;
        };
        let color = Rgb(cell_color(grid, result, index));
        let left = PNG_CELL_GAP + x as u32 * pitch;
        let top = PNG_CELL_GAP + y as u32 * pitch;
        for py in top..top + PNG_CELL_PIXELS {
            for px in left..left + PNG_CELL_PIXELS {
                img.put_pixel(px, py, color);
            }
        }
    }

    img
}

/// Export a solution as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_png(grid: &Grid, result: &SolverResult, output_path: &Path) -> Result<()> {
    let img = render_solution(grid, result);

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    img.save(output_path).map_err(|e| SolverError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
