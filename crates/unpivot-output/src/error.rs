//! Error types for table writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while serializing a table to a delimited text destination.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Could not create the destination's parent directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested encoding label is not recognized.
    #[error("unknown encoding label '{encoding}' for {path}")]
    UnknownEncoding { path: PathBuf, encoding: String },

    /// A cell could not be represented in the target encoding.
    #[error("table contents cannot be encoded as {encoding} for {path}")]
    Encode { path: PathBuf, encoding: String },

    /// CSV serialization failed.
    #[error("failed to serialize CSV for {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Could not write to the destination.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for write operations.
pub type Result<T> = std::result::Result<T, WriteError>;
