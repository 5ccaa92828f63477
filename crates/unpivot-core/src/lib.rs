//! Core matrix-to-long reshaping.
//!
//! A matrix-format table keys its interior cells by one header row of column
//! labels and one leading column of row labels. [`reshape`] flattens such a
//! table into long format: one `(row label, column label, value)` record per
//! retained cell.

pub mod config;
pub mod error;
pub mod reshape;
pub mod table;

pub use config::ReshapeConfig;
pub use error::{ReshapeError, Result};
pub use reshape::{OUTPUT_HEADER, reshape};
pub use table::Table;
