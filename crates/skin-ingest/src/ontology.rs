//! Loading of ontology documents into a flattened mapping.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use skin_map::flatten_document_into;
use skin_model::{ClassificationNode, OntologyDocument, OntologyMapping};

use crate::discovery::list_ontology_files;
use crate::error::{IngestError, Result};

/// Reads and parses one ontology document.
///
/// The top level is either a single node object or an array of root nodes.
pub fn read_ontology_document(path: &Path) -> Result<OntologyDocument> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_ontology_document(&contents).map_err(|e| IngestError::OntologyParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parses document text with no nesting limit; the stack grows on demand.
fn parse_ontology_document(contents: &str) -> serde_json::Result<OntologyDocument> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut deserializer = serde_json::Deserializer::from_str(contents);
    deserializer.disable_recursion_limit();
    let document = {
        let stacked = serde_stacker::Deserializer::new(&mut deserializer);
        if contents.trim_start().starts_with('[') {
            Vec::<ClassificationNode>::deserialize(stacked).map(OntologyDocument::Forest)?
        } else {
            ClassificationNode::deserialize(stacked).map(OntologyDocument::Tree)?
        }
    };
    deserializer.end()?;
    Ok(document)
}

/// Loads every ontology document in `dir` into one mapping.
///
/// Documents are flattened in filename order; a description defined in more
/// than one place keeps the path seen last. A directory without documents
/// yields an empty mapping, so every label will be unmatched.
///
/// # Errors
///
/// Fails when the directory cannot be listed or any document cannot be read
/// or parsed. No partial mapping is returned.
pub fn load_ontology_mapping(dir: &Path) -> Result<OntologyMapping> {
    let files = list_ontology_files(dir)?;
    if files.is_empty() {
        warn!(ontology_dir = %dir.display(), "no ontology documents found");
    }

    let mut mapping = OntologyMapping::new();
    for path in &files {
        let document = read_ontology_document(path)?;
        let before = mapping.len();
        flatten_document_into(&mut mapping, &document);
        debug!(
            path = %path.display(),
            roots = document.roots().len(),
            new_entries = mapping.len() - before,
            "ontology document loaded"
        );
    }
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_node_and_forest() {
        let tree = parse_ontology_document(r#"{"code":"L20","description":"eczema"}"#)
            .expect("parse tree");
        assert!(matches!(tree, OntologyDocument::Tree(_)));

        let forest = parse_ontology_document(
            "\u{feff}\n  [{\"code\":\"L20\"},{\"code\":\"L40\",\"description\":\"psoriasis\"}]",
        )
        .expect("parse forest");
        assert_eq!(forest.roots().len(), 2);
    }

    #[test]
    fn reports_malformed_json() {
        assert!(parse_ontology_document("{\"code\": \"L20\",").is_err());
        assert!(parse_ontology_document("\"eczema\"").is_err());
        assert!(parse_ontology_document("").is_err());
        assert!(parse_ontology_document("{\"code\": \"L20\"} trailing").is_err());
    }
}
