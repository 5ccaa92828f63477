//! Reshape configuration.

/// Parameters governing a single matrix-to-long reshape.
///
/// The defaults describe the minimal matrix layout: the first row holds
/// column labels, the first column holds row labels, and everything else is
/// data. All indices are caller-supplied; nothing is inferred from the table
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReshapeConfig {
    /// Field separator, threaded through to the CSV reader and writer.
    pub delimiter: u8,
    /// When true, cells whose value equals `null_string` are not emitted.
    pub skip_null_record: bool,
    /// The cell value treated as empty. Some exports use `-` or `N/A`.
    pub null_string: String,
    /// Column index supplying the row label within each row.
    pub vertical_name_index: usize,
    /// Trailing rows excluded from both label extraction and data iteration,
    /// e.g. summary rows at the bottom of a report.
    pub vertical_ignore_tail: usize,
    /// Row index supplying the column labels.
    pub horizontal_name_row: usize,
    /// Trailing columns excluded from both label extraction and data
    /// iteration.
    pub horizontal_ignore_tail: usize,
    /// First row index of the data region.
    pub data_start_line: usize,
    /// First column index of the data region.
    pub data_start_column: usize,
}

impl Default for ReshapeConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_null_record: true,
            null_string: String::new(),
            vertical_name_index: 0,
            vertical_ignore_tail: 0,
            horizontal_name_row: 0,
            horizontal_ignore_tail: 0,
            data_start_line: 1,
            data_start_column: 1,
        }
    }
}

impl ReshapeConfig {
    /// Row index where vertical-label extraction begins.
    ///
    /// This returns `data_start_column`, reusing a column offset for the row
    /// dimension. Upstream producers of matrix exports depend on the label
    /// range this yields, so the coupling is preserved and given a single
    /// visible home here.
    // TODO: confirm with data owners whether this range was ever meant to
    // start at `data_start_line` instead.
    #[must_use]
    pub fn vertical_label_start(&self) -> usize {
        self.data_start_column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_first_row_first_column_headers() {
        let config = ReshapeConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(config.skip_null_record);
        assert_eq!(config.null_string, "");
        assert_eq!(config.vertical_name_index, 0);
        assert_eq!(config.vertical_ignore_tail, 0);
        assert_eq!(config.horizontal_name_row, 0);
        assert_eq!(config.horizontal_ignore_tail, 0);
        assert_eq!(config.data_start_line, 1);
        assert_eq!(config.data_start_column, 1);
    }

    #[test]
    fn vertical_label_start_tracks_data_start_column() {
        let config = ReshapeConfig {
            data_start_column: 3,
            ..ReshapeConfig::default()
        };
        assert_eq!(config.vertical_label_start(), 3);
    }
}
