//! Error types for solver input validation and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
///
/// Infeasibility is never an error: an assignment that cannot be completed is
/// `None`, and a grid that admits no placement yields an empty result. This
/// type is reserved for malformed input and failing I/O.
#[derive(Debug)]
pub enum SolverError {
    /// Board dimensions or cell data are unusable
    InvalidGrid {
        /// Description of what's wrong with the board
        reason: String,
    },

    /// Pattern descriptor violates the caller contract
    InvalidPattern {
        /// Identifier of the offending pattern
        pattern: String,
        /// Explanation of the violation
        reason: String,
    },

    /// A requirement references an item missing from the catalog
    UnknownItem {
        /// Pattern whose requirement list is affected
        pattern: String,
        /// Item identifier that failed to resolve
        item: String,
    },

    /// Requested pattern is not in the catalog
    UnknownPattern {
        /// Identifier that was requested
        pattern: String,
    },

    /// Two catalog entries share an identifier
    DuplicateItem {
        /// The repeated identifier
        id: String,
    },

    /// Catalog text could not be deserialized
    CatalogParse {
        /// Where the catalog text came from (a path or `<inline>`)
        origin: String,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered layout to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A background solve could not be started
    WorkerSpawn {
        /// Underlying thread creation error
        source: std::io::Error,
    },

    /// A background solve panicked before producing a result
    WorkerPanic {
        /// Generation of the request that panicked
        generation: u64,
    },

    /// The log backend could not be installed
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { reason } => write!(f, "Invalid grid: {reason}"),
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid pattern '{pattern}': {reason}")
            }
            Self::UnknownItem { pattern, item } => {
                write!(f, "Pattern '{pattern}' requires unknown item '{item}'")
            }
            Self::UnknownPattern { pattern } => {
                write!(f, "Pattern '{pattern}' is not in the catalog")
            }
            Self::DuplicateItem { id } => {
                write!(f, "Catalog defines '{id}' more than once")
            }
            Self::CatalogParse { origin, source } => {
                write!(f, "Failed to parse catalog '{origin}': {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::WorkerSpawn { source } => write!(f, "Failed to start solver thread: {source}"),
            Self::WorkerPanic { generation } => {
                write!(f, "Solve request {generation} panicked")
            }
            Self::Logging { reason } => write!(f, "Failed to initialize logging: {reason}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::WorkerSpawn { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid pattern error
pub fn invalid_pattern(pattern: &str, reason: &impl ToString) -> SolverError {
    SolverError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> SolverError {
    let path = path.into();
    move |source| SolverError::FileSystem {
        path,
        operation,
        source,
    }
}
