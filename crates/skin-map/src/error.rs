//! Error types for label translation.

use thiserror::Error;

/// Errors that can occur while translating a record table.
#[derive(Debug, Error)]
pub enum MapError {
    /// The input table lacks a column the translation cannot proceed without.
    #[error("required column '{column}' not found in input table")]
    MissingColumn { column: String },
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MapError::MissingColumn {
            column: "label_to_icd".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required column 'label_to_icd' not found in input table"
        );
    }
}
