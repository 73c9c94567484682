//! Solver constants and runtime configuration defaults

// Strategy selection
/// Largest candidate count for which the exact search is attempted
pub const EXACT_CANDIDATE_LIMIT: usize = 30;
/// Number of randomized greedy constructions in the heuristic search
pub const HEURISTIC_TRIALS: usize = 100;

// Safety valve for the ingredient assigner, raised automatically for large placement sets
/// Minimum iteration budget for one assignment run
pub const ASSIGNMENT_ITERATION_CAP: usize = 100;

/// Default footprint side length when a pattern omits it
pub const DEFAULT_PATTERN_SIZE: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 256;

// Reference board used when no board file is given
/// Width of the reference board
pub const REFERENCE_GRID_WIDTH: usize = 10;
/// Height of the reference board
pub const REFERENCE_GRID_HEIGHT: usize = 10;
/// Cells unlocked on the reference board (a 4x3 block)
pub const REFERENCE_UNLOCKED_CELLS: [usize; 12] = [33, 34, 35, 36, 43, 44, 45, 46, 53, 54, 55, 56];

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Side length of one board cell in exported images
pub const PNG_CELL_PIXELS: u32 = 24;
/// Gap between cells in exported images
pub const PNG_CELL_GAP: u32 = 2;
/// Fill colour for pattern placements
pub const SPOT_COLOR: [u8; 3] = [147, 51, 234];
/// Fill colour for open cells without a filler
pub const OPEN_COLOR: [u8; 3] = [16, 185, 129];
/// Fill colour for locked cells
pub const LOCKED_COLOR: [u8; 3] = [127, 29, 29];
/// Background colour behind the cells
pub const BACKGROUND_COLOR: [u8; 3] = [15, 23, 42];
/// Default colour for catalog items that omit one
pub const DEFAULT_ITEM_COLOR: [u8; 3] = [148, 163, 184];
