//! Command-line interface for solving catalog patterns on a board

use crate::algorithm::requirements::RequirementSpec;
use crate::algorithm::solver::{Solver, SolverConfig, SolverResult};
use crate::algorithm::validation::verify_solution;
use crate::catalog::{Catalog, PatternDescriptor};
use crate::io::board::{load_grid, render_legend, render_solution};
use crate::io::configuration::{
    ASSIGNMENT_ITERATION_CAP, DEFAULT_SEED, EXACT_CANDIDATE_LIMIT, HEURISTIC_TRIALS,
};
use crate::io::error::{Result, SolverError, file_system, invalid_parameter};
use crate::io::image::export_solution_png;
use crate::io::logging::level_for;
use crate::io::progress::ProgressManager;
use crate::spatial::{Grid, PatternGeometry};
use clap::{ArgAction, Parser};
use log::{LevelFilter, info, warn};
use std::io::Write;
use std::path::PathBuf;

const STDOUT: &str = "<stdout>";

#[derive(Parser)]
#[command(name = "mutation-planner")]
#[command(
    author,
    version,
    about = "Place as many mutation patterns as a board can support"
)]
/// Command-line arguments for the placement planner
pub struct Cli {
    /// Catalog of items and patterns (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Board file; the built-in reference board is used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub grid: Option<PathBuf>,

    /// Pattern to solve, repeatable; every catalog pattern when omitted
    #[arg(short, long = "pattern", value_name = "ID")]
    pub patterns: Vec<String>,

    /// Random seed for reproducible heuristic search
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Largest candidate count solved exactly
    #[arg(long, default_value_t = EXACT_CANDIDATE_LIMIT)]
    pub exact_limit: usize,

    /// Greedy constructions per heuristic solve
    #[arg(short, long, default_value_t = HEURISTIC_TRIALS)]
    pub trials: usize,

    /// Write a PNG rendering of each solution
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Print the label of every base item
    #[arg(short, long)]
    pub legend: bool,

    /// Suppress progress output and all log messages below errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by `--verbose` and `--quiet`
    pub const fn log_level(&self) -> LevelFilter {
        level_for(self.verbose, self.quiet)
    }

    /// Solver configuration built from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if `--trials` is zero
    pub fn solver_config(&self) -> Result<SolverConfig> {
        if self.trials == 0 {
            return Err(invalid_parameter(
                "trials",
                &self.trials,
                &"at least one greedy construction is required",
            ));
        }
        Ok(SolverConfig {
            exact_candidate_limit: self.exact_limit,
            heuristic_trials: self.trials,
            assignment_iteration_cap: ASSIGNMENT_ITERATION_CAP,
            seed: self.seed,
        })
    }

    /// PNG destination for `pattern` when `total` patterns are being solved
    ///
    /// A single pattern writes to `--png` as given; several patterns write
    /// `<stem>_<id>.png` next to it.
    pub fn png_path(&self, pattern: &str, total: usize) -> Option<PathBuf> {
        let base = self.png.as_ref()?;
        if total <= 1 {
            return Some(base.clone());
        }
        let stem = base.file_stem().unwrap_or_default();
        let name = format!("{}_{pattern}.png", stem.to_string_lossy());
        Some(base.parent().map_or_else(|| PathBuf::from(&name), |p| p.join(&name)))
    }
}

/// Runs the solver over the selected patterns and reports each result
pub struct Planner {
    cli: Cli,
}

impl Planner {
    /// Create a planner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve and print to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if any input fails to load, a pattern is invalid, or
    /// output cannot be written
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Solve and print to `out`
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Planner::run`]
    pub fn run_with_output(&self, out: &mut impl Write) -> Result<()> {
        let config = self.cli.solver_config()?;
        let catalog = Catalog::from_path(&self.cli.catalog)?;
        let grid = match &self.cli.grid {
            Some(path) => load_grid(path)?,
            None => Grid::reference()?,
        };
        let patterns = self.select_patterns(&catalog)?;
        info!(
            "{} pattern(s) on a {}x{} board with {} open cells",
            patterns.len(),
            grid.width(),
            grid.height(),
            grid.available_count()
        );

        if self.cli.legend {
            render_legend(out, &catalog).map_err(file_system(STDOUT, "write legend"))?;
        }

        let progress = if self.cli.quiet {
            ProgressManager::hidden(patterns.len())
        } else {
            ProgressManager::new(patterns.len())
        };

        let mut solver = Solver::new(config);
        for pattern in &patterns {
            progress.start_pattern(&pattern.id);
            let result = solver.solve(pattern, &grid, &catalog)?;
            Self::check(pattern, &grid, &catalog, &result)?;

            writeln!(
                out,
                "{id} ({size}x{size}): {count} spot(s), {strategy} search",
                id = pattern.id,
                size = pattern.size,
                count = result.count(),
                strategy = result.strategy,
            )
            .and_then(|()| render_solution(out, &grid, &result))
            .map_err(file_system(STDOUT, "write board"))?;

            if let Some(path) = self.cli.png_path(&pattern.id, patterns.len()) {
                export_solution_png(&grid, &result, &path)?;
                info!("wrote {}", path.display());
            }
            progress.complete_pattern();
        }
        progress.finish();

        Ok(())
    }

    fn select_patterns(&self, catalog: &Catalog) -> Result<Vec<PatternDescriptor>> {
        if self.cli.patterns.is_empty() {
            if catalog.patterns().is_empty() {
                warn!("catalog defines no patterns");
            }
            return Ok(catalog.patterns().to_vec());
        }

        self.cli
            .patterns
            .iter()
            .map(|id| {
                catalog
                    .pattern(id)
                    .cloned()
                    .ok_or_else(|| SolverError::UnknownPattern {
                        pattern: id.clone(),
                    })
            })
            .collect()
    }

    fn check(
        pattern: &PatternDescriptor,
        grid: &Grid,
        catalog: &Catalog,
        result: &SolverResult,
    ) -> Result<()> {
        let requirements = RequirementSpec::resolve(pattern, catalog)?;
        let geometry = PatternGeometry::for_grid(pattern.size, grid);
        if let Err(violation) =
            verify_solution(&result.spots, &result.layout, grid, geometry, &requirements)
        {
            warn!("solution for '{}' failed verification: {violation}", pattern.id);
        }
        Ok(())
    }
}
