//! Tabular input records.

/// Column holding the free-text label to standardize.
pub const LABEL_COLUMN: &str = "label_to_icd";
/// Column receiving the resolved ICD-10 code.
pub const ICD10_COLUMN: &str = "icd10";
/// Column holding an existing ICD-11 code, consulted for row selection only.
pub const ICD11_COLUMN: &str = "icd11";
/// "To be determined": marks unmatched rows and rows awaiting a code.
pub const UNMATCHED_SENTINEL: &str = "tbd";

/// An in-memory CSV table with raw string cells.
///
/// Rows may be shorter than the header; missing trailing cells read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Returns the index of `name`, appending an empty column when absent.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.headers.push(name.to_string());
        self.headers.len() - 1
    }

    /// Cell value, or `None` when the column or the cell is absent.
    pub fn cell(&self, row: usize, column: Option<usize>) -> Option<&str> {
        let column = column?;
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Sets a cell, padding the row with empty cells when it is too short.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) {
        let Some(cells) = self.rows.get_mut(row) else {
            return;
        };
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value.into();
    }
}

/// True when an existing code cell is missing, empty, or the `tbd` sentinel.
pub fn is_unresolved_code(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(value) => value.is_empty() || value == UNMATCHED_SENTINEL,
    }
}
