//! Board availability state
//!
//! The board is addressed two ways: callers and the solver use flat row-major
//! indices (`x = index % width`, `y = index / width`), while storage is a
//! 2D array indexed `[row, col]`.

use ndarray::Array2;

use crate::io::configuration::{
    MAX_GRID_DIMENSION, REFERENCE_GRID_HEIGHT, REFERENCE_GRID_WIDTH, REFERENCE_UNLOCKED_CELLS,
};
use crate::io::error::{Result, SolverError};

/// Rectangular board of cells, each either available or locked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Availability flags (indexed by `row`, `col`)
    cells: Array2<bool>,
}

impl Grid {
    /// Create a board with every cell locked
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            cells: Array2::from_elem((height, width), false),
        })
    }

    /// Create a board with every cell available
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn filled(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            cells: Array2::from_elem((height, width), true),
        })
    }

    /// Create a board from row-major availability flags
    ///
    /// # Errors
    ///
    /// Returns an error if the flag count is not a positive multiple of `width`
    /// or the resulting dimensions are out of range
    pub fn from_cells(width: usize, cells: Vec<bool>) -> Result<Self> {
        if width == 0 || cells.len() % width != 0 {
            return Err(SolverError::InvalidGrid {
                reason: format!(
                    "{} cells cannot be arranged in rows of width {width}",
                    cells.len()
                ),
            });
        }
        let height = cells.len() / width;
        validate_dimensions(width, height)?;

        let cells =
            Array2::from_shape_vec((height, width), cells).map_err(|e| SolverError::InvalidGrid {
                reason: e.to_string(),
            })?;
        Ok(Self { cells })
    }

    /// Create a board of the given size with only the listed cells available
    ///
    /// Indices outside the board are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn with_available(width: usize, height: usize, available: &[usize]) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        for &index in available {
            grid.set_available(index, true);
        }
        Ok(grid)
    }

    /// The 10x10 reference board with a 4x3 unlocked block in the middle
    ///
    /// # Errors
    ///
    /// Returns an error only if the reference constants are inconsistent
    pub fn reference() -> Result<Self> {
        Self::with_available(
            REFERENCE_GRID_WIDTH,
            REFERENCE_GRID_HEIGHT,
            &REFERENCE_UNLOCKED_CELLS,
        )
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the board holds no cells (never the case for a validated board)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert a flat index to `(x, y)` coordinates
    pub fn coordinates(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.len()).then(|| (index % self.width(), index / self.width()))
    }

    /// Convert `(x, y)` coordinates to a flat index
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width() && y < self.height()).then(|| y * self.width() + x)
    }

    /// Whether the cell exists and is available
    pub fn is_available(&self, index: usize) -> bool {
        self.coordinates(index)
            .and_then(|(x, y)| self.cells.get([y, x]))
            .copied()
            .unwrap_or(false)
    }

    /// Set a cell's availability, returning false if the index is off the board
    pub fn set_available(&mut self, index: usize, available: bool) -> bool {
        let Some((x, y)) = self.coordinates(index) else {
            return false;
        };
        match self.cells.get_mut([y, x]) {
            Some(cell) => {
                *cell = available;
                true
            }
            None => false,
        }
    }

    /// Indices of every available cell in row-major order
    pub fn available_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, &available)| available.then_some(index))
            .collect()
    }

    /// Number of available cells
    pub fn available_count(&self) -> usize {
        self.cells.iter().filter(|&&available| available).count()
    }

    /// Row-major availability flags
    pub fn to_cells(&self) -> Vec<bool> {
        self.cells.iter().copied().collect()
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SolverError::InvalidGrid {
            reason: format!("dimensions must be positive, got {width}x{height}"),
        });
    }
    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(SolverError::InvalidGrid {
            reason: format!(
                "dimensions {width}x{height} exceed the maximum of {MAX_GRID_DIMENSION}"
            ),
        });
    }
    Ok(())
}
