//! CLI entry point for the mutation placement planner

use clap::Parser;
use mutation_planner::io::cli::{Cli, Planner};
use mutation_planner::io::logging;

fn main() -> mutation_planner::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level())?;
    Planner::new(cli).run()
}
