//! Table output: in-memory tables to delimited text files.

pub mod error;
pub mod writer;

pub use error::{Result, WriteError};
pub use writer::{WriteOptions, write_table};
