//! Error types for table reading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while obtaining a table from a delimited text source.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Source file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Source file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested encoding label is not recognized.
    #[error("unknown encoding label '{encoding}' for {path}")]
    UnknownEncoding { path: PathBuf, encoding: String },

    /// The file contents are not valid under the stated encoding.
    #[error("{path} is not valid {encoding}")]
    Decode { path: PathBuf, encoding: String },

    /// Malformed delimited text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

/// Result type for read operations.
pub type Result<T> = std::result::Result<T, ReadError>;
