/// Board text files and terminal rendering
pub mod board;
/// Command-line argument parsing and run orchestration
pub mod cli;
/// Solver constants and output settings
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of solved boards
pub mod image;
/// Stderr backend for the log facade
pub mod logging;
/// Progress display across patterns
pub mod progress;
