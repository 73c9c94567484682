//! Footprint and neighbor-ring index arithmetic for pattern placements
//!
//! A placement is identified only by its top-left cell. Everything else about
//! it (the cells it covers, the ring of cells that may hold its fillers) is
//! derived here so there is a single source of geometric truth.

use crate::spatial::grid::Grid;

/// Shape of a square pattern on a board of known dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternGeometry {
    size: usize,
    width: usize,
    height: usize,
}

impl PatternGeometry {
    /// Describe a `size x size` pattern on a `width x height` board
    pub const fn new(size: usize, width: usize, height: usize) -> Self {
        Self {
            size,
            width,
            height,
        }
    }

    /// Describe a `size x size` pattern on the given board
    pub fn for_grid(size: usize, grid: &Grid) -> Self {
        Self::new(size, grid.width(), grid.height())
    }

    /// Footprint side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    const fn anchor(&self, top_left: usize) -> Option<(usize, usize)> {
        if self.width == 0 || top_left >= self.cell_count() {
            return None;
        }
        Some((top_left % self.width, top_left / self.width))
    }

    /// Cells covered by a placement anchored at `top_left`, row by row
    ///
    /// Returns `None` if any covered cell falls off the board.
    pub fn occupied_cells(&self, top_left: usize) -> Option<Vec<usize>> {
        let (tx, ty) = self.anchor(top_left)?;
        if self.size == 0 || tx + self.size > self.width || ty + self.size > self.height {
            return None;
        }

        let mut cells = Vec::with_capacity(self.size * self.size);
        for y in ty..ty + self.size {
            for x in tx..tx + self.size {
                cells.push(y * self.width + x);
            }
        }
        Some(cells)
    }

    /// Cells bordering a placement anchored at `top_left`, clipped to the board
    ///
    /// Covers the footprint's bounding box grown by one cell on every side,
    /// minus the footprint itself, scanned row by row. For a 1x1 pattern this
    /// is the 8-neighborhood.
    pub fn neighbor_ring(&self, top_left: usize) -> Vec<usize> {
        let Some((tx, ty)) = self.anchor(top_left) else {
            return Vec::new();
        };

        let size = self.size as isize;
        let mut ring = Vec::with_capacity(4 * self.size + 4);
        for dy in -1..=size {
            for dx in -1..=size {
                let interior = (0..size).contains(&dx) && (0..size).contains(&dy);
                if interior {
                    continue;
                }
                let nx = tx as isize + dx;
                let ny = ty as isize + dy;
                if nx >= 0 && ny >= 0 && (nx as usize) < self.width && (ny as usize) < self.height
                {
                    ring.push(ny as usize * self.width + nx as usize);
                }
            }
        }
        ring
    }
}

/// Cells covered by a `size x size` placement, or `None` if it leaves the board
pub fn occupied_cells(
    top_left: usize,
    size: usize,
    grid_width: usize,
    grid_height: usize,
) -> Option<Vec<usize>> {
    PatternGeometry::new(size, grid_width, grid_height).occupied_cells(top_left)
}

/// Cells bordering a `size x size` placement, clipped to the board
pub fn neighbor_ring(
    top_left: usize,
    size: usize,
    grid_width: usize,
    grid_height: usize,
) -> Vec<usize> {
    PatternGeometry::new(size, grid_width, grid_height).neighbor_ring(top_left)
}
