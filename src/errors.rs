//! Error types for fibo operations.
//!
//! Generation itself is pure; errors only arise at the output boundary
//! (writing the series, serializing the report, opening an output file).

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for fibo output operations.
#[derive(Error, Debug)]
pub enum FiboError {
    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the series report failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The requested output file could not be created.
    #[error("cannot create output file {path}: {source}")]
    OutputFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for fibo operations.
pub type Result<T> = std::result::Result<T, FiboError>;
