//! Error types for ontology and record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading ontologies or reading and writing records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Ontology Errors ===
    /// Ontology document is not valid JSON or does not match the node shape.
    #[error("failed to parse ontology document {path}: {source}")]
    OntologyParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === CSV Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A data row has more fields than the header.
    #[error("CSV row at line {line} in {path} has {found} fields, header has {expected}")]
    RowTooWide {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Failed to write CSV.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
