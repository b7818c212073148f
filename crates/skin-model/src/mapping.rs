//! Flattened ontology lookup table.

use std::collections::BTreeMap;

/// Separator placed between hierarchy codes when a path is rendered.
pub const CODE_SEPARATOR: &str = "-";

/// Ordered codes from the root of a classification down to one node.
pub type CodePath = Vec<String>;

/// Mapping from node description to its code path.
///
/// Descriptions are unique keys. Inserting a description that is already
/// present replaces the earlier path (last write wins), which is how
/// duplicate descriptions across documents are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyMapping {
    entries: BTreeMap<String, CodePath>,
}

impl OntologyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the path for `description`, returning the replaced path.
    pub fn insert(&mut self, description: impl Into<String>, path: CodePath) -> Option<CodePath> {
        self.entries.insert(description.into(), path)
    }

    /// Looks up a description (exact, case-sensitive).
    pub fn get(&self, description: &str) -> Option<&[String]> {
        self.entries.get(description).map(Vec::as_slice)
    }

    pub fn contains(&self, description: &str) -> bool {
        self.entries.contains_key(description)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by description.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(description, path)| (description.as_str(), path.as_slice()))
    }
}
