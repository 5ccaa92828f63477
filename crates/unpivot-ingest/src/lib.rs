//! Table ingestion: delimited text files into in-memory tables.

pub mod error;
pub mod reader;

pub use error::{ReadError, Result};
pub use reader::{ReadOptions, read_table};
