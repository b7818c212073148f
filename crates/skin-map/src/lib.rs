//! Label standardization against hierarchical ICD ontologies.
//!
//! - [`flatten`]: turn classification trees into a description lookup table
//! - [`granularity`]: cut code paths to a requested depth
//! - [`translate`]: fill the `icd10` column of a record table

pub mod error;
pub mod flatten;
pub mod granularity;
pub mod translate;

pub use error::{MapError, Result};
pub use flatten::{flatten_document_into, flatten_documents, flatten_node_into};
pub use granularity::resolve_granularity;
pub use translate::{Translation, TranslationStats, translate_records};
