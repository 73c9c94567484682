/// Greedy filler assignment around placements
pub mod assignment;
/// Exact branch-and-bound placement search
pub mod exact;
/// Capacity pruning shared by both searches
pub mod feasibility;
/// Randomized multi-start greedy placement search
pub mod heuristic;
/// Requirement multisets resolved against the catalog
pub mod requirements;
/// Last-call-wins background solving
pub mod session;
/// Strategy selection and the solver entry point
pub mod solver;
/// Invariant checks for finished solutions
pub mod validation;
