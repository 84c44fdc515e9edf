//! CLI error type.

use adalzw::LzwError;
use thiserror::Error;

/// Errors surfaced by the `adalzw` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Direction or mode argument not recognised.
    #[error("Illegal command line argument: {0}")]
    InvalidArgument(String),

    /// Compression or expansion failed.
    #[error(transparent)]
    Lzw(#[from] LzwError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The statistics summary could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = std::result::Result<T, CliError>;
