//! Data model for standardizing skin condition labels to ICD codes.

pub mod mapping;
pub mod node;
pub mod options;
pub mod record;

pub use mapping::{CODE_SEPARATOR, CodePath, OntologyMapping};
pub use node::{ClassificationNode, OntologyDocument};
pub use options::TranslateOptions;
pub use record::{
    ICD10_COLUMN, ICD11_COLUMN, LABEL_COLUMN, RecordTable, UNMATCHED_SENTINEL, is_unresolved_code,
};
