//! The matrix-to-long reshape algorithm.

use tracing::debug;

use crate::config::ReshapeConfig;
use crate::error::{ReshapeError, Result};
use crate::table::Table;

/// Fixed header row of every reshaped table.
pub const OUTPUT_HEADER: [&str; 3] = ["column1", "column2", "value"];

/// Reshapes a matrix-format table into long format.
///
/// The output starts with [`OUTPUT_HEADER`] and contains one three-cell
/// record per data cell, in row-major input order. When `skip_null_record`
/// is set, cells equal to `null_string` are dropped.
///
/// Column labels wrap around: a data row with more cells than there are
/// labels assigns cell offset `i` the label at `i % label_count`, which
/// keeps slightly ragged exports usable instead of failing. An empty data
/// range yields a header-only table.
///
/// # Errors
///
/// Fails without producing partial output when the header row is missing or
/// yields no column labels, or when a row is too short to contain the
/// configured label and data columns.
pub fn reshape(table: &Table, config: &ReshapeConfig) -> Result<Table> {
    let row_bound = tail_bound(table.rows.len(), config.vertical_ignore_tail);

    let column1 = vertical_labels(table, config, row_bound)?;
    let column2 = horizontal_labels(table, config)?;
    let n_cols = column2.len();
    debug!(
        row_labels = column1.len(),
        column_labels = n_cols,
        "extracted label ranges"
    );

    let mut records: Vec<Vec<String>> = Vec::new();
    records.push(OUTPUT_HEADER.iter().map(|cell| (*cell).to_string()).collect());

    let data_start = config.data_start_line.min(row_bound);
    for (offset, row) in table.rows[data_start..row_bound].iter().enumerate() {
        let index = data_start + offset;
        let label = row_label(row, index, config)?;
        if row.len() < config.data_start_column {
            return Err(ReshapeError::RowTooShort {
                row: index,
                len: row.len(),
                min: config.data_start_column,
            });
        }
        let cell_bound = tail_bound(row.len(), config.horizontal_ignore_tail);
        let cell_start = config.data_start_column.min(cell_bound);
        for (i, value) in row[cell_start..cell_bound].iter().enumerate() {
            if config.skip_null_record && *value == config.null_string {
                continue;
            }
            records.push(vec![
                label.to_string(),
                column2[i % n_cols].clone(),
                value.clone(),
            ]);
        }
    }
    Ok(Table::new(records))
}

/// Row labels over the vertical range.
///
/// The range starts at [`ReshapeConfig::vertical_label_start`] and ends
/// before the ignored tail rows. Every row in the range must reach the
/// label column.
fn vertical_labels(table: &Table, config: &ReshapeConfig, row_bound: usize) -> Result<Vec<String>> {
    let start = config.vertical_label_start().min(row_bound);
    let mut labels = Vec::with_capacity(row_bound - start);
    for (offset, row) in table.rows[start..row_bound].iter().enumerate() {
        labels.push(row_label(row, start + offset, config)?.to_string());
    }
    Ok(labels)
}

/// Column labels: the header row sliced from the data-start column to the
/// ignored tail.
fn horizontal_labels(table: &Table, config: &ReshapeConfig) -> Result<Vec<String>> {
    let header =
        table
            .rows
            .get(config.horizontal_name_row)
            .ok_or(ReshapeError::MissingLabelRow {
                row: config.horizontal_name_row,
                len: table.rows.len(),
            })?;
    let bound = tail_bound(header.len(), config.horizontal_ignore_tail);
    let start = config.data_start_column.min(bound);
    let labels = header[start..bound].to_vec();
    if labels.is_empty() {
        return Err(ReshapeError::NoColumnLabels {
            row: config.horizontal_name_row,
        });
    }
    Ok(labels)
}

fn row_label<'a>(row: &'a [String], index: usize, config: &ReshapeConfig) -> Result<&'a str> {
    row.get(config.vertical_name_index)
        .map(String::as_str)
        .ok_or(ReshapeError::RowTooShort {
            row: index,
            len: row.len(),
            min: config.vertical_name_index + 1,
        })
}

/// End bound of a range that excludes `ignore_tail` trailing items.
fn tail_bound(len: usize, ignore_tail: usize) -> usize {
    len.saturating_sub(ignore_tail)
}
