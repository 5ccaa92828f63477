//! Read-reshape-write pipeline for a single invocation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use unpivot_core::{ReshapeConfig, reshape};
use unpivot_ingest::{ReadOptions, read_table};
use unpivot_output::{WriteOptions, write_table};

/// A single reshape invocation: where to read, how to reshape, where to
/// write.
#[derive(Debug, Clone)]
pub struct ReshapeJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: ReshapeConfig,
    pub input_encoding: String,
    pub output_encoding: String,
    pub trim_fields: bool,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy)]
pub struct JobSummary {
    /// Rows in the input table, header included.
    pub input_rows: usize,
    /// Emitted records, header excluded.
    pub records: usize,
}

/// Runs a reshape job end to end.
///
/// Reads the input table, reshapes it, and writes the long-format output.
/// Each call owns its configuration; no state survives between invocations,
/// so jobs over separate files may run concurrently.
///
/// # Errors
///
/// Propagates read, reshape, and write failures with the offending path
/// attached. A failed run leaves no output file behind.
pub fn run_job(job: &ReshapeJob) -> Result<JobSummary> {
    let span = info_span!("reshape", input = %job.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let read_options = ReadOptions {
        delimiter: job.config.delimiter,
        encoding: job.input_encoding.clone(),
        trim_fields: job.trim_fields,
    };
    let table = read_table(&job.input, &read_options)
        .with_context(|| format!("read {}", job.input.display()))?;
    let input_rows = table.len();

    let output = reshape(&table, &job.config)
        .with_context(|| format!("reshape {}", job.input.display()))?;
    let records = output.len().saturating_sub(1);

    let write_options = WriteOptions {
        delimiter: job.config.delimiter,
        encoding: job.output_encoding.clone(),
    };
    write_table(&job.output, &output, &write_options)
        .with_context(|| format!("write {}", job.output.display()))?;

    info!(
        input_rows,
        records,
        duration_ms = start.elapsed().as_millis(),
        "reshape complete"
    );
    Ok(JobSummary {
        input_rows,
        records,
    })
}
