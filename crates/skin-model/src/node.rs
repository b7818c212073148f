//! Classification tree nodes as they appear in ontology documents.

use serde::{Deserialize, Deserializer};

/// One node of a hierarchical classification (chapter, block, category, ...).
///
/// Absent and `null` fields deserialize to their empty value, so partially
/// filled exports load without extra preprocessing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClassificationNode {
    /// Hierarchy code, e.g. `L00-L08` or `L01`. May be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    /// Free-text description, used as the lookup key. May be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Child nodes in document order.
    #[serde(
        default,
        rename = "subcategory",
        deserialize_with = "null_as_default"
    )]
    pub children: Vec<ClassificationNode>,
}

impl ClassificationNode {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: ClassificationNode) -> Self {
        self.children.push(child);
        self
    }

    /// True when the node contributes a mapping entry.
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

impl Drop for ClassificationNode {
    // Unlinks descendants onto a work list so deep trees drop without recursion.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Parsed content of one ontology document.
///
/// A document holds either a single root node or a list of root nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OntologyDocument {
    Tree(ClassificationNode),
    Forest(Vec<ClassificationNode>),
}

impl OntologyDocument {
    /// Root nodes in document order.
    pub fn roots(&self) -> &[ClassificationNode] {
        match self {
            OntologyDocument::Tree(node) => std::slice::from_ref(node),
            OntologyDocument::Forest(nodes) => nodes,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
