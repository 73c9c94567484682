//! Spatial data structures for the placement board
//!
//! This module contains spatial-related functionality including:
//! - Board availability state
//! - Footprint and neighbor-ring geometry
//! - Bit-packed cell sets

/// Bit-packed sets of cell indices
pub mod cellset;
/// Footprint and neighbor-ring computation for placements
pub mod geometry;
/// Board availability state and index conversion
pub mod grid;

pub use cellset::CellSet;
pub use geometry::PatternGeometry;
pub use grid::Grid;
