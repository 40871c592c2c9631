//! Error types for loopbench.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for loopbench operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Everything that can stop a benchmark. None of these are recoverable:
/// the binary reports them and exits with status 1.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A matrix was requested with a zero dimension
    #[error("Invalid dimension: matrix must be at least 1x1, got {rows}x{cols}")]
    InvalidDimension {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Problem shape is not usable (non-positive m, k or n, or bad buffer length)
    #[error("Invalid dimensions: {0}")]
    InvalidDims(String),

    /// Suite configuration is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Matrix storage could not be obtained
    #[error("Allocation failure: could not reserve {elements} f64 elements")]
    AllocationFailure {
        /// Number of elements requested
        elements: usize,
    },

    /// Report file could not be created or written
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File being written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }
}
