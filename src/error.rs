//! Error types for file-backed CSV operations
//!
//! Parsing itself is infallible (malformed quoting is absorbed, empty input
//! yields an empty result); errors only arise from file I/O.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors produced by the file reader and writer
#[derive(Debug, Error)]
pub enum GridError {
    /// Failed to read from a CSV file
    #[error("Read error: {0}")]
    ReadError(String),

    /// Failed to write to a CSV file
    #[error("Write error: {0}")]
    WriteError(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
