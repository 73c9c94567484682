//! Tests for command-line parsing and planner runs

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;
    use mutation_planner::SolverError;
    use mutation_planner::io::cli::{Cli, Planner};
    use mutation_planner::io::configuration::{DEFAULT_SEED, EXACT_CANDIDATE_LIMIT, HEURISTIC_TRIALS};
    use std::fs;
    use std::path::{Path, PathBuf};

    const CATALOG: &str = r#"
[[items]]
id = "wheat"
name = "Wheat"

[[items]]
id = "golden"
name = "Golden Wheat"
kind = "mutation"
requirements = [{ id = "wheat", amount = 1 }]

[[items]]
id = "bare"
name = "Bare"
kind = "mutation"
"#;

    fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
        let catalog = dir.join("catalog.toml");
        let board = dir.join("board.txt");
        fs::write(&catalog, CATALOG).expect("write catalog");
        fs::write(&board, "###\n###\n###\n").expect("write board");
        (catalog, board)
    }

    fn run(args: &[&str]) -> Result<String, SolverError> {
        let cli = Cli::parse_from(args);
        let mut out = Vec::new();
        Planner::new(cli).run_with_output(&mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    // Tests parsing with only the required catalog argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "--catalog", "items.toml"]);

        assert_eq!(cli.catalog, PathBuf::from("items.toml"));
        assert_eq!(cli.grid, None);
        assert!(cli.patterns.is_empty());
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.exact_limit, EXACT_CANDIDATE_LIMIT);
        assert_eq!(cli.trials, HEURISTIC_TRIALS);
        assert!(!cli.quiet);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    // Tests parsing with every argument supplied
    // Verified by dropping the repeatable pattern flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "-c",
            "items.toml",
            "--grid",
            "board.txt",
            "-p",
            "golden",
            "--pattern",
            "bare",
            "--seed",
            "7",
            "--exact-limit",
            "12",
            "--trials",
            "5",
            "--png",
            "out/layout.png",
            "--legend",
            "-vv",
        ]);

        assert_eq!(cli.grid, Some(PathBuf::from("board.txt")));
        assert_eq!(cli.patterns, vec!["golden", "bare"]);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.exact_limit, 12);
        assert_eq!(cli.trials, 5);
        assert!(cli.legend);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), LevelFilter::Debug);

        let config = cli.solver_config().expect("positive trials");
        assert_eq!(config.exact_candidate_limit, 12);
        assert_eq!(config.heuristic_trials, 5);
        assert_eq!(config.seed, 7);
    }

    // Tests zero trials are rejected
    // Verified by accepting any trial count
    #[test]
    fn test_zero_trials() {
        let cli = Cli::parse_from(["program", "-c", "items.toml", "--trials", "0"]);
        assert!(matches!(
            cli.solver_config(),
            Err(SolverError::InvalidParameter {
                parameter: "trials",
                ..
            })
        ));
    }

    // Tests PNG naming for one and several patterns
    // Verified by always suffixing the pattern id
    #[test]
    fn test_png_path() {
        let cli = Cli::parse_from(["program", "-c", "c.toml", "--png", "out/layout.png"]);
        assert_eq!(
            cli.png_path("golden", 1),
            Some(PathBuf::from("out/layout.png"))
        );
        assert_eq!(
            cli.png_path("golden", 2),
            Some(PathBuf::from("out/layout_golden.png"))
        );

        let without = Cli::parse_from(["program", "-c", "c.toml"]);
        assert_eq!(without.png_path("golden", 1), None);
    }

    // Tests a run prints a header and board for the requested pattern
    // Verified by skipping the header line
    #[test]
    fn test_run_single_pattern() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (catalog, board) = write_inputs(dir.path());
        let output = run(&[
            "program",
            "-c",
            catalog.to_str().expect("utf-8 path"),
            "-g",
            board.to_str().expect("utf-8 path"),
            "-p",
            "golden",
            "--quiet",
        ])
        .expect("run succeeds");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "golden (1x1): 8 spot(s), exact search",
                " !  !  !",
                " ! WH  !",
                " !  !  !",
            ]
        );
    }

    // Tests every catalog pattern is solved when none is named
    // Verified by solving only the first pattern
    #[test]
    fn test_run_all_patterns_with_legend() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (catalog, board) = write_inputs(dir.path());
        let output = run(&[
            "program",
            "-c",
            catalog.to_str().expect("utf-8 path"),
            "-g",
            board.to_str().expect("utf-8 path"),
            "--legend",
            "-q",
        ])
        .expect("run succeeds");

        assert!(output.starts_with("WH = Wheat\n"));
        assert!(output.contains("golden (1x1): 8 spot(s)"));
        assert!(output.contains("bare (1x1): 9 spot(s)"));
    }

    // Tests the reference board is used when no board file is given
    // Verified by defaulting to an empty board
    #[test]
    fn test_run_reference_board() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (catalog, _) = write_inputs(dir.path());
        let output = run(&[
            "program",
            "-c",
            catalog.to_str().expect("utf-8 path"),
            "-p",
            "bare",
            "-q",
        ])
        .expect("run succeeds");

        assert!(output.starts_with("bare (1x1): 12 spot(s), exact search"));
        assert_eq!(output.lines().count(), 11);
    }

    // Tests one PNG per pattern is written when several are solved
    // Verified by writing every pattern to the same file
    #[test]
    fn test_run_png_per_pattern() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (catalog, board) = write_inputs(dir.path());
        let png = dir.path().join("images").join("layout.png");
        run(&[
            "program",
            "-c",
            catalog.to_str().expect("utf-8 path"),
            "-g",
            board.to_str().expect("utf-8 path"),
            "--png",
            png.to_str().expect("utf-8 path"),
            "-q",
        ])
        .expect("run succeeds");

        assert!(dir.path().join("images").join("layout_golden.png").exists());
        assert!(dir.path().join("images").join("layout_bare.png").exists());
        assert!(!png.exists());
    }

    // Tests unknown pattern ids are reported
    // Verified by silently skipping unknown ids
    #[test]
    fn test_run_unknown_pattern() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (catalog, _) = write_inputs(dir.path());
        let outcome = run(&[
            "program",
            "-c",
            catalog.to_str().expect("utf-8 path"),
            "-p",
            "ruby",
            "-q",
        ]);

        assert!(matches!(
            outcome,
            Err(SolverError::UnknownPattern { pattern }) if pattern == "ruby"
        ));
    }

    // Tests a missing catalog file fails before solving
    // Verified by defaulting to an empty catalog
    #[test]
    fn test_run_missing_catalog() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.toml");
        let outcome = run(&["program", "-c", missing.to_str().expect("utf-8 path"), "-q"]);
        assert!(matches!(outcome, Err(SolverError::FileSystem { .. })));
    }
}
