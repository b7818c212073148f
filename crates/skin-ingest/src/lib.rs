//! Ontology and record ingestion for skin label standardization.
//!
//! # Features
//!
//! - **Ontology Discovery**: Find JSON ontology documents in a data folder
//! - **Ontology Loading**: Parse and flatten documents into one lookup table
//! - **CSV Records**: Read and write record tables without altering untouched cells
//! - **Unmatched Labels**: Write the list of labels that found no code
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use skin_ingest::{load_ontology_mapping, read_record_table};
//!
//! let mapping = load_ontology_mapping(Path::new("data/icd10"))?;
//! let table = read_record_table(Path::new("labels.csv"))?;
//! ```

mod csv_table;
mod discovery;
mod error;
mod ontology;
mod unmatched;

// === Error Types ===
pub use error::{IngestError, Result};

// === Ontology ===
pub use discovery::{ONTOLOGY_EXTENSION, list_ontology_files};
pub use ontology::{load_ontology_mapping, read_ontology_document};

// === CSV Records ===
pub use csv_table::{read_record_table, write_record_table};

// === Unmatched Labels ===
pub use unmatched::{UNMATCHED_LABELS_FILE, write_unmatched_labels};
