//! Maximum placement of square mutation patterns on a board of unlocked cells
//!
//! Each placed pattern needs a multiset of filler items in the ring of cells
//! around it, and one filler serves every placement it borders. The solver
//! finds the largest set of non-overlapping placements whose fillers can all
//! be supplied, and a concrete layout of those fillers.

#![forbid(unsafe_code)]

/// Placement search, filler assignment and solver dispatch
pub mod algorithm;
/// Item definitions and pattern descriptors
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Board state and placement geometry
pub mod spatial;

pub use algorithm::solver::{Solver, SolverConfig, SolverResult, Strategy, solve};
pub use io::error::{Result, SolverError};
