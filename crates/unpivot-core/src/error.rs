//! Error types for the reshape core.

use thiserror::Error;

/// Structural precondition violations detected during a reshape.
///
/// Any of these aborts the transform with no partial output.
#[derive(Debug, Error)]
pub enum ReshapeError {
    /// The horizontal label range is empty, so no cell can be labeled.
    #[error("no column labels in header row {row}")]
    NoColumnLabels { row: usize },

    /// The configured header row does not exist.
    #[error("header row {row} is out of bounds for a table of {len} rows")]
    MissingLabelRow { row: usize, len: usize },

    /// A row is too short to contain the configured label or data columns.
    #[error("row {row} has {len} cells, expected at least {min}")]
    RowTooShort { row: usize, len: usize, min: usize },
}

/// Result type for reshape operations.
pub type Result<T> = std::result::Result<T, ReshapeError>;
