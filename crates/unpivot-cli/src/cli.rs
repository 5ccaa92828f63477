//! CLI argument definitions for the unpivot tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "unpivot",
    version,
    about = "Reshape a matrix-format CSV into a long-format record list",
    long_about = "Reshape a matrix-format CSV (one header row of column labels, one\n\
                  leading column of row labels) into long format: one record per\n\
                  retained cell, as (row label, column label, value)."
)]
pub struct Cli {
    /// Path to the matrix-format input CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the long-format output CSV (parent directories are created).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Field separator for both input and output.
    #[arg(long = "delimiter", default_value = ",")]
    pub delimiter: char,

    /// Emit records for cells matching the null string instead of skipping
    /// them.
    #[arg(long = "keep-null-records")]
    pub keep_null_records: bool,

    /// Cell value treated as empty.
    #[arg(long = "null-string", default_value = "")]
    pub null_string: String,

    /// Column index supplying the row label within each row.
    #[arg(long = "vertical-name-index", default_value_t = 0)]
    pub vertical_name_index: usize,

    /// Trailing rows to exclude from labels and data (e.g. summary rows).
    #[arg(long = "vertical-ignore-tail", default_value_t = 0)]
    pub vertical_ignore_tail: usize,

    /// Row index supplying the column labels.
    #[arg(long = "horizontal-name-row", default_value_t = 0)]
    pub horizontal_name_row: usize,

    /// Trailing columns to exclude from labels and data.
    #[arg(long = "horizontal-ignore-tail", default_value_t = 0)]
    pub horizontal_ignore_tail: usize,

    /// First row index of the data region.
    #[arg(long = "data-start-line", default_value_t = 1)]
    pub data_start_line: usize,

    /// First column index of the data region.
    #[arg(long = "data-start-column", default_value_t = 1)]
    pub data_start_column: usize,

    /// Input text encoding (e.g. utf-8, windows-1252, shift_jis).
    #[arg(long = "input-encoding", default_value = "utf-8")]
    pub input_encoding: String,

    /// Output text encoding.
    #[arg(long = "output-encoding", default_value = "utf-8")]
    pub output_encoding: String,

    /// Keep whitespace around unquoted input fields.
    #[arg(long = "no-trim")]
    pub no_trim: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
