//! Plain-text board files and terminal rendering of solutions
//!
//! Board files hold one line per row: `#` or `O` marks an unlocked cell, `.`
//! or `X` a locked one. Whitespace and blank lines are ignored.

use std::io::Write;
use std::path::Path;

use crate::algorithm::solver::SolverResult;
use crate::catalog::Catalog;
use crate::io::error::{Result, SolverError, file_system};
use crate::spatial::Grid;

/// Parse a board from its text form
///
/// # Errors
///
/// Returns an error if the text contains no rows, rows differ in width, or a
/// character other than `#`, `O`, `.` or `X` appears
pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut width = None;
    let mut cells = Vec::new();

    for (line_number, line) in text.lines().enumerate() {
        let row: Vec<bool> = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '#' | 'O' => Ok(true),
                '.' | 'X' => Ok(false),
                other => Err(SolverError::InvalidGrid {
                    reason: format!("unexpected '{other}' on line {}", line_number + 1),
                }),
            })
            .collect::<Result<Vec<bool>>>()?;
        if row.is_empty() {
            continue;
        }

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(SolverError::InvalidGrid {
                reason: format!(
                    "line {} has {} cells, expected {expected}",
                    line_number + 1,
                    row.len()
                ),
            });
        }
        cells.extend(row);
    }

    let width = width.ok_or_else(|| SolverError::InvalidGrid {
        reason: "board has no rows".to_string(),
    })?;
    Grid::from_cells(width, cells)
}

/// Load a board from a text file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse
pub fn load_grid(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(file_system(path, "board read"))?;
    parse_grid(&text)
}

/// Write a board back in its text form
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_grid(out: &mut impl Write, grid: &Grid) -> std::io::Result<()> {
    for row in grid.to_cells().chunks(grid.width()) {
        let line: String = row.iter().map(|&open| if open { '#' } else { '.' }).collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Two-character label for one board cell
pub fn cell_label(grid: &Grid, result: &SolverResult, index: usize) -> String {
    if result.covers(grid, index) {
        " !".to_string()
    } else if let Some(item) = result.layout.get(&index) {
        format!("{:>2}", item.label().chars().take(2).collect::<String>())
    } else if grid.is_available(index) {
        " .".to_string()
    } else {
        " X".to_string()
    }
}

/// Render a solution as a character board
///
/// Every footprint cell shows as `!`, fillers as their label, open cells as `.` and
/// locked cells as `X`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn render_solution(
    out: &mut impl Write,
    grid: &Grid,
    result: &SolverResult,
) -> std::io::Result<()> {
    for y in 0..grid.height() {
        let line: Vec<String> = (0..grid.width())
            .filter_map(|x| grid.index_of(x, y))
            .map(|index| cell_label(grid, result, index))
            .collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Print the label of every base item
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn render_legend(out: &mut impl Write, catalog: &Catalog) -> std::io::Result<()> {
    for item in catalog.base_items() {
        writeln!(out, "{} = {}", item.label(), item.name)?;
    }
    Ok(())
}
