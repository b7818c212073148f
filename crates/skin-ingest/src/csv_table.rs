//! CSV reading and writing for record tables.
//!
//! Cells are kept as raw strings: nothing is trimmed or type-inferred, so
//! columns the translator does not touch are written back as they were read.

use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use skin_model::RecordTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file with a single header row into a [`RecordTable`].
///
/// Rows shorter than the header are kept as-is; blank lines are skipped.
///
/// # Errors
///
/// Fails when the file cannot be parsed, has no header row, or contains a row
/// with more fields than the header.
pub fn read_record_table(path: &Path) -> Result<RecordTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_parse_error(path, &e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_parse_error(path, &e))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_parse_error(path, &e))?;
        if record.len() > headers.len() {
            return Err(IngestError::RowTooWide {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RecordTable::new(headers, rows))
}

/// Writes a [`RecordTable`] as CSV with `\n` line endings.
///
/// Short rows are padded with empty cells to the header width. Fields are
/// quoted only when they need to be.
///
/// # Errors
///
/// Fails when the file cannot be created (for example when its folder is
/// missing) or a record cannot be written or flushed.
pub fn write_record_table(path: &Path, table: &RecordTable) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| csv_write_error(path, &e))?;

    writer
        .write_record(&table.headers)
        .map_err(|e| csv_write_error(path, &e))?;
    let width = table.headers.len();
    for row in &table.rows {
        let padding = width.saturating_sub(row.len());
        let cells = row
            .iter()
            .map(String::as_str)
            .chain(std::iter::repeat_n("", padding));
        writer
            .write_record(cells)
            .map_err(|e| csv_write_error(path, &e))?;
    }
    writer.flush().map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

fn csv_parse_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn csv_write_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_keeps_raw_cells() {
        let file = create_temp_csv("label_to_icd,count,note\n eczema ,007,\"a, b\"\n\npsoriasis,1\n");
        let table = read_record_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["label_to_icd", "count", "note"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec![" eczema ", "007", "a, b"]);
        assert_eq!(table.rows[1], vec!["psoriasis", "1"]);
    }

    #[test]
    fn test_read_strips_bom_from_header() {
        let file = create_temp_csv("\u{feff}label_to_icd,icd10\neczema,\n");
        let table = read_record_table(file.path()).unwrap();
        assert_eq!(table.column_index("label_to_icd"), Some(0));
    }

    #[test]
    fn test_read_empty_file() {
        let file = create_temp_csv("");
        let result = read_record_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_rejects_wide_rows() {
        let file = create_temp_csv("a,b\n1,2\n1,2,3\n");
        let result = read_record_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::RowTooWide {
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_write_pads_and_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = RecordTable::new(
            vec!["label_to_icd".into(), "note".into(), "icd10".into()],
            vec![
                vec!["eczema".into(), "a, b".into(), "L20".into()],
                vec!["psoriasis".into()],
            ],
        );
        write_record_table(&path, &table).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "label_to_icd,note,icd10\neczema,\"a, b\",L20\npsoriasis,,\n"
        );
    }

    #[test]
    fn test_write_into_missing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("out.csv");
        let table = RecordTable::new(vec!["label_to_icd".into()], Vec::new());
        let result = write_record_table(&path, &table);
        match result {
            Err(IngestError::CsvWrite { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
