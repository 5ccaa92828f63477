//! CSV file reading into an in-memory [`Table`].

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use unpivot_core::Table;

use crate::error::{ReadError, Result};

/// Options for reading a delimited text file.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field separator.
    pub delimiter: u8,
    /// Text encoding label, e.g. `utf-8`, `windows-1252`, `shift_jis`.
    pub encoding: String,
    /// Strip whitespace around unquoted fields. Matrix exports commonly pad
    /// fields after the delimiter, so this is on by default.
    pub trim_fields: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encoding: "utf-8".to_string(),
            trim_fields: true,
        }
    }
}

/// Reads a delimited text file into a [`Table`].
///
/// Rows keep their original lengths (no padding or truncation), quoting
/// follows CSV conventions with doubled double-quotes, and records may end
/// in CR, LF, or CRLF. A leading BOM is stripped during decoding.
///
/// # Errors
///
/// Fails when the file is missing or unreadable, when its bytes are invalid
/// under the requested encoding, or when the CSV structure is malformed.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<Table> {
    let bytes = fs::read(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            ReadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReadError::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    })?;
    let text = decode(&bytes, &options.encoding, path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .trim(if options.trim_fields {
            Trim::Fields
        } else {
            Trim::None
        })
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| ReadError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(path = %path.display(), rows = rows.len(), "read table");
    Ok(Table::new(rows))
}

/// Decodes raw bytes under a named encoding.
fn decode(bytes: &[u8], encoding: &str, path: &Path) -> Result<String> {
    let Some(codec) = encoding_rs::Encoding::for_label(encoding.as_bytes()) else {
        return Err(ReadError::UnknownEncoding {
            path: path.to_path_buf(),
            encoding: encoding.to_string(),
        });
    };
    let (text, _, had_errors) = codec.decode(bytes);
    if had_errors {
        return Err(ReadError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.to_string(),
        });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    fn cells(table: &Table) -> Vec<Vec<&str>> {
        table
            .rows
            .iter()
            .map(|row| row.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn reads_basic_matrix() {
        let file = create_temp_csv(b",A,B\nr1,1,2\nr2,3,4\n");
        let table = read_table(file.path(), &ReadOptions::default()).unwrap();
        assert_eq!(
            cells(&table),
            vec![
                vec!["", "A", "B"],
                vec!["r1", "1", "2"],
                vec!["r2", "3", "4"],
            ]
        );
    }

    #[test]
    fn preserves_ragged_rows() {
        let file = create_temp_csv(b"a,b,c\nd\ne,f,g,h\n");
        let table = read_table(file.path(), &ReadOptions::default()).unwrap();
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[1].len(), 1);
        assert_eq!(table.rows[2].len(), 4);
    }

    #[test]
    fn accepts_crlf_records() {
        let file = create_temp_csv(b"a,b\r\nc,d\r\n");
        let table = read_table(file.path(), &ReadOptions::default()).unwrap();
        assert_eq!(cells(&table), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn unescapes_doubled_quotes() {
        let file = create_temp_csv(b"\"he said \"\"hi\"\"\",\"x, y\"\n");
        let table = read_table(file.path(), &ReadOptions::default()).unwrap();
        assert_eq!(cells(&table), vec![vec!["he said \"hi\"", "x, y"]]);
    }

    #[test]
    fn custom_delimiter() {
        let file = create_temp_csv(b"a\tb\tc\n");
        let options = ReadOptions {
            delimiter: b'\t',
            ..ReadOptions::default()
        };
        let table = read_table(file.path(), &options).unwrap();
        assert_eq!(cells(&table), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn trims_padded_fields_by_default() {
        let file = create_temp_csv(b"a, b ,c\n");
        let table = read_table(file.path(), &ReadOptions::default()).unwrap();
        assert_eq!(cells(&table), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn trim_can_be_disabled() {
        let file = create_temp_csv(b"a, b ,c\n");
        let options = ReadOptions {
            trim_fields: false,
            ..ReadOptions::default()
        };
        let table = read_table(file.path(), &options).unwrap();
        assert_eq!(cells(&table), vec![vec!["a", " b ", "c"]]);
    }

    #[test]
    fn strips_utf8_bom() {
        let file = create_temp_csv(b"\xef\xbb\xbfa,b\n");
        let table = read_table(file.path(), &ReadOptions::default()).unwrap();
        assert_eq!(cells(&table), vec![vec!["a", "b"]]);
    }

    #[test]
    fn decodes_shift_jis() {
        // 0x82 0xA0 is HIRAGANA LETTER A in Shift_JIS.
        let file = create_temp_csv(b"\x82\xa0,x\n");
        let options = ReadOptions {
            encoding: "shift_jis".to_string(),
            ..ReadOptions::default()
        };
        let table = read_table(file.path(), &options).unwrap();
        assert_eq!(cells(&table), vec![vec!["\u{3042}", "x"]]);
    }

    #[test]
    fn missing_file_is_reported() {
        let result = read_table(Path::new("/no/such/file.csv"), &ReadOptions::default());
        assert!(matches!(result, Err(ReadError::FileNotFound { .. })));
    }

    #[test]
    fn invalid_bytes_for_encoding_are_reported() {
        let file = create_temp_csv(b"a,\xff\xfe\n");
        let result = read_table(file.path(), &ReadOptions::default());
        assert!(matches!(result, Err(ReadError::Decode { .. })));
    }

    #[test]
    fn unknown_encoding_label_is_reported() {
        let file = create_temp_csv(b"a,b\n");
        let options = ReadOptions {
            encoding: "klingon-8".to_string(),
            ..ReadOptions::default()
        };
        let result = read_table(file.path(), &options);
        assert!(matches!(result, Err(ReadError::UnknownEncoding { .. })));
    }
}
