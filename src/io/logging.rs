//! Minimal stderr backend for the `log` facade used by the command-line tool

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::io::error::{Result, SolverError};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        is_enabled(metadata.level())
    }

    // Diagnostics go to stderr so they never mix with rendered boards on stdout
    #[allow(clippy::print_stderr)]
    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Map a `-v` count to a level filter; `quiet` keeps only errors
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Whether a record at `level` passes the current filter
pub fn is_enabled(level: Level) -> bool {
    level <= log::max_level()
}

/// Install the stderr logger at the given level
///
/// # Errors
///
/// Returns an error if another logger is already installed
pub fn init(level: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|e| SolverError::Logging {
        reason: e.to_string(),
    })?;
    log::set_max_level(level);
    Ok(())
}
