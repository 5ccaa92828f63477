//! CSV file writing from an in-memory [`Table`].

use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::debug;

use unpivot_core::Table;

use crate::error::{Result, WriteError};

/// Options for writing a delimited text file.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Field separator.
    pub delimiter: u8,
    /// Text encoding label, e.g. `utf-8`, `windows-1252`, `shift_jis`.
    pub encoding: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encoding: "utf-8".to_string(),
        }
    }
}

/// Writes a [`Table`] to a delimited text file.
///
/// Missing parent directories are created. Records are terminated with a
/// single LF, and fields containing the delimiter, quotes, or line breaks
/// are double-quoted with doubled inner quotes. The table is serialized to a
/// temp file in the destination directory and renamed into place, so a
/// failed write never leaves a partial file at the destination.
///
/// # Errors
///
/// Fails when the parent directory cannot be created, when a cell cannot be
/// represented in the target encoding, or when the destination cannot be
/// written.
pub fn write_table(path: &Path, table: &Table, options: &WriteOptions) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|error| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source: error,
            })?;
            parent
        }
        _ => Path::new("."),
    };

    let text = serialize(table, options.delimiter, path)?;
    let bytes = encode(&text, &options.encoding, path)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|error| WriteError::FileWrite {
        path: path.to_path_buf(),
        source: error,
    })?;
    temp.write_all(&bytes).map_err(|error| WriteError::FileWrite {
        path: path.to_path_buf(),
        source: error,
    })?;
    temp.persist(path).map_err(|error| WriteError::FileWrite {
        path: path.to_path_buf(),
        source: error.error,
    })?;
    debug!(path = %path.display(), rows = table.len(), "wrote table");
    Ok(())
}

/// Serializes the table to CSV text with LF record terminators.
fn serialize(table: &Table, delimiter: u8, path: &Path) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|error| WriteError::Csv {
                path: path.to_path_buf(),
                message: error.to_string(),
            })?;
    }
    let buffer = writer.into_inner().map_err(|error| WriteError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    String::from_utf8(buffer).map_err(|error| WriteError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    })
}

/// Encodes CSV text under a named encoding.
fn encode(text: &str, encoding: &str, path: &Path) -> Result<Vec<u8>> {
    let Some(codec) = encoding_rs::Encoding::for_label(encoding.as_bytes()) else {
        return Err(WriteError::UnknownEncoding {
            path: path.to_path_buf(),
            encoding: encoding.to_string(),
        });
    };
    let (bytes, _, had_errors) = codec.encode(text);
    if had_errors {
        return Err(WriteError::Encode {
            path: path.to_path_buf(),
            encoding: encoding.to_string(),
        });
    }
    Ok(bytes.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Table {
        Table::new(vec![
            vec!["column1".to_string(), "column2".to_string(), "value".to_string()],
            vec!["r1".to_string(), "A".to_string(), "1".to_string()],
        ])
    }

    #[test]
    fn writes_lf_terminated_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_table(&path, &sample(), &WriteOptions::default()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "column1,column2,value\nr1,A,1\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.csv");
        write_table(&path, &sample(), &WriteOptions::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn quotes_fields_containing_the_delimiter_or_quotes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(vec![vec![
            "a,b".to_string(),
            "he said \"hi\"".to_string(),
            "plain".to_string(),
        ]]);
        write_table(&path, &table, &WriteOptions::default()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "\"a,b\",\"he said \"\"hi\"\"\",plain\n");
    }

    #[test]
    fn custom_delimiter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let options = WriteOptions {
            delimiter: b'\t',
            ..WriteOptions::default()
        };
        write_table(&path, &sample(), &options).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("column1\tcolumn2\tvalue\n"));
    }

    #[test]
    fn encodes_to_shift_jis() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(vec![vec!["\u{3042}".to_string(), "x".to_string()]]);
        let options = WriteOptions {
            encoding: "shift_jis".to_string(),
            ..WriteOptions::default()
        };
        write_table(&path, &table, &options).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, b"\x82\xa0,x\n");
    }

    #[test]
    fn unmappable_characters_are_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(vec![vec!["\u{3042}".to_string()]]);
        let options = WriteOptions {
            encoding: "windows-1252".to_string(),
            ..WriteOptions::default()
        };
        let result = write_table(&path, &table, &options);
        assert!(matches!(result, Err(WriteError::Encode { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn unknown_encoding_label_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let options = WriteOptions {
            encoding: "klingon-8".to_string(),
            ..WriteOptions::default()
        };
        let result = write_table(&path, &sample(), &options);
        assert!(matches!(result, Err(WriteError::UnknownEncoding { .. })));
    }
}
