use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;

use crate::{
    algorithm::assignment::{IngredientAssigner, Layout},
    algorithm::exact::PlacementEnumerator,
    algorithm::feasibility::CapacityCheck,
    algorithm::heuristic::PlacementHeuristic,
    algorithm::requirements::RequirementSpec,
    catalog::{Catalog, PatternDescriptor},
    io::configuration::{
        ASSIGNMENT_ITERATION_CAP, DEFAULT_SEED, EXACT_CANDIDATE_LIMIT, HEURISTIC_TRIALS,
    },
    io::error::{Result, invalid_pattern},
    spatial::{Grid, PatternGeometry},
};

/// Solver parameters controlling strategy selection and search effort
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Largest candidate count for which the exact search runs
    pub exact_candidate_limit: usize,
    /// Greedy constructions per heuristic solve
    pub heuristic_trials: usize,
    /// Minimum iteration budget for one filler assignment
    pub assignment_iteration_cap: usize,
    /// Seed for the default random source
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            exact_candidate_limit: EXACT_CANDIDATE_LIMIT,
            heuristic_trials: HEURISTIC_TRIALS,
            assignment_iteration_cap: ASSIGNMENT_ITERATION_CAP,
            seed: DEFAULT_SEED,
        }
    }
}

/// Search strategy used to produce a result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Exhaustive branch-and-bound
    Exact,
    /// Randomized multi-start greedy
    Heuristic,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Placements and filler layout for one pattern on one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverResult {
    /// Top-left indices in discovery order
    pub spots: Vec<usize>,
    /// Filler assignment
    pub layout: Layout,
    /// Strategy that produced this result
    pub strategy: Strategy,
    /// Footprint side length of the solved pattern
    pub size: usize,
}

impl SolverResult {
    /// Number of placements
    pub const fn count(&self) -> usize {
        self.spots.len()
    }

    /// True if no placement was possible
    pub const fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// True if `index` lies inside any placement footprint on `grid`
    pub fn covers(&self, grid: &Grid, index: usize) -> bool {
        let geometry = PatternGeometry::for_grid(self.size, grid);
        self.spots.iter().any(|&spot| {
            geometry
                .occupied_cells(spot)
                .is_some_and(|cells| cells.contains(&index))
        })
    }
}

/// Choose between exact and heuristic search
///
/// The exact search is exponential in the candidate count, so it only runs
/// for 1x1 patterns on boards with few available cells.
pub const fn select_strategy(candidate_count: usize, size: usize, exact_limit: usize) -> Strategy {
    if candidate_count <= exact_limit && size == 1 {
        Strategy::Exact
    } else {
        Strategy::Heuristic
    }
}

/// Reject patterns that cannot be placed on the board at all
///
/// # Errors
///
/// Returns an error if the footprint size is zero or larger than either
/// board dimension
pub fn validate_pattern(pattern: &PatternDescriptor, grid: &Grid) -> Result<()> {
    if pattern.size == 0 {
        return Err(invalid_pattern(&pattern.id, &"footprint size must be at least 1"));
    }
    if pattern.size > grid.width() || pattern.size > grid.height() {
        return Err(invalid_pattern(
            &pattern.id,
            &format!(
                "{0}x{0} footprint does not fit a {1}x{2} board",
                pattern.size,
                grid.width(),
                grid.height()
            ),
        ));
    }
    Ok(())
}

/// Entry point dispatching each solve to the exact or heuristic search
///
/// Every call recomputes from scratch; only the random source carries over
/// between calls.
pub struct Solver<R = StdRng> {
    config: SolverConfig,
    rng: R,
}

impl Solver<StdRng> {
    /// Create a solver whose random source is seeded from `config.seed`
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }
}

impl<R: Rng> Solver<R> {
    /// Create a solver with an injected random source
    pub const fn with_rng(config: SolverConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Active configuration
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the largest assignable set of placements for `pattern` on `grid`
    ///
    /// An empty result means no placement is feasible; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern cannot fit the board, a requirement has
    /// a zero amount, or a requirement names an item missing from `catalog`
    pub fn solve(
        &mut self,
        pattern: &PatternDescriptor,
        grid: &Grid,
        catalog: &Catalog,
    ) -> Result<SolverResult> {
        validate_pattern(pattern, grid)?;
        let requirements = RequirementSpec::resolve(pattern, catalog)?;
        Ok(self.run(pattern, &requirements, grid))
    }

    fn run(
        &mut self,
        pattern: &PatternDescriptor,
        requirements: &RequirementSpec,
        grid: &Grid,
    ) -> SolverResult {
        let geometry = PatternGeometry::for_grid(pattern.size, grid);
        let candidates = grid.available_indices();
        let check = CapacityCheck::new(grid, geometry, requirements.total());
        let assigner = IngredientAssigner::new(
            grid,
            geometry,
            requirements,
            self.config.assignment_iteration_cap,
        );

        let strategy = select_strategy(
            candidates.len(),
            pattern.size,
            self.config.exact_candidate_limit,
        );
        debug!(
            "solving '{id}' ({size}x{size}, {units} units) over {count} candidates with {strategy} search",
            id = pattern.id,
            size = pattern.size,
            units = requirements.total(),
            count = candidates.len(),
        );

        let solution = match strategy {
            Strategy::Exact => PlacementEnumerator::new(check, assigner).solve(&candidates),
            Strategy::Heuristic => {
                PlacementHeuristic::new(check, assigner, self.config.heuristic_trials)
                    .solve(&candidates, &mut self.rng)
            }
        };

        SolverResult {
            spots: solution.spots,
            layout: solution.layout,
            strategy,
            size: pattern.size,
        }
    }
}

/// Solve with the default configuration
///
/// # Errors
///
/// Returns an error under the same conditions as [`Solver::solve`]
pub fn solve(pattern: &PatternDescriptor, grid: &Grid, catalog: &Catalog) -> Result<SolverResult> {
    Solver::new(SolverConfig::default()).solve(pattern, grid, catalog)
}
