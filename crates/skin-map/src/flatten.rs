//! Flattening of classification trees into a description lookup table.

use skin_model::{ClassificationNode, CodePath, OntologyDocument, OntologyMapping};

/// Adds every described node under `root` to `mapping`.
///
/// Each entry maps a node's description to the codes of its ancestors
/// followed by its own code. Nodes with an empty description add no entry
/// but their code still prefixes the paths of their descendants.
///
/// Nodes are visited depth-first in document order, and a description seen
/// again replaces the earlier entry (last write wins). Traversal uses a work
/// stack, so nesting depth is bounded by memory rather than the call stack.
pub fn flatten_node_into(mapping: &mut OntologyMapping, root: &ClassificationNode) {
    // `path` holds the codes of the node being visited; entries past a
    // popped node's depth belong to an already finished subtree.
    let mut path: CodePath = Vec::new();
    let mut stack: Vec<(&ClassificationNode, usize)> = vec![(root, 0)];
    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(node.code.clone());
        if node.has_description() {
            mapping.insert(node.description.clone(), path.clone());
        }
        // Reversed so the first child is popped first.
        for child in node.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }
}

/// Adds every root of `document` to `mapping`, in order.
pub fn flatten_document_into(mapping: &mut OntologyMapping, document: &OntologyDocument) {
    for root in document.roots() {
        flatten_node_into(mapping, root);
    }
}

/// Flattens documents in order into a fresh mapping.
pub fn flatten_documents<'a, I>(documents: I) -> OntologyMapping
where
    I: IntoIterator<Item = &'a OntologyDocument>,
{
    let mut mapping = OntologyMapping::new();
    for document in documents {
        flatten_document_into(&mut mapping, document);
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|code| (*code).to_string()).collect()
    }

    #[test]
    fn single_node() {
        let mut mapping = OntologyMapping::new();
        flatten_node_into(&mut mapping, &ClassificationNode::new("L20", "eczema"));
        assert_eq!(mapping.get("eczema"), Some(path(&["L20"]).as_slice()));
    }

    #[test]
    fn nested_paths_include_ancestors() {
        let root = ClassificationNode::new("L00-L99", "Skin diseases").with_child(
            ClassificationNode::new("L00-L08", "Infections")
                .with_child(ClassificationNode::new("L01", "Impetigo"))
                .with_child(ClassificationNode::new("L02", "Abscess")),
        );
        let mut mapping = OntologyMapping::new();
        flatten_node_into(&mut mapping, &root);

        assert_eq!(mapping.len(), 4);
        assert_eq!(
            mapping.get("Abscess"),
            Some(path(&["L00-L99", "L00-L08", "L02"]).as_slice())
        );
        assert_eq!(mapping.get("Skin diseases"), Some(path(&["L00-L99"]).as_slice()));
    }

    #[test]
    fn undescribed_nodes_extend_paths() {
        let root = ClassificationNode::new("XII", "")
            .with_child(ClassificationNode::new("", "").with_child(ClassificationNode::new(
                "L20",
                "Atopic dermatitis",
            )));
        let mut mapping = OntologyMapping::new();
        flatten_node_into(&mut mapping, &root);

        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.get("Atopic dermatitis"),
            Some(path(&["XII", "", "L20"]).as_slice())
        );
    }

    #[test]
    fn later_duplicate_in_document_order_wins() {
        // The duplicate inside the first subtree comes before the second
        // top-level child in document order.
        let root = ClassificationNode::new("R", "")
            .with_child(
                ClassificationNode::new("A", "")
                    .with_child(ClassificationNode::new("A1", "rash")),
            )
            .with_child(ClassificationNode::new("B", "rash"));
        let mut mapping = OntologyMapping::new();
        flatten_node_into(&mut mapping, &root);
        assert_eq!(mapping.get("rash"), Some(path(&["R", "B"]).as_slice()));
    }

    #[test]
    fn later_document_wins() {
        let first = OntologyDocument::Tree(ClassificationNode::new("L20", "eczema"));
        let second = OntologyDocument::Forest(vec![ClassificationNode::new("L30.9", "eczema")]);
        let mapping = flatten_documents([&first, &second]);
        assert_eq!(mapping.get("eczema"), Some(path(&["L30.9"]).as_slice()));
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let depth = 100_000;
        let mut node = ClassificationNode::new(format!("C{depth}"), "leaf");
        for level in (0..depth).rev() {
            node = ClassificationNode::new(format!("C{level}"), "").with_child(node);
        }
        let mut mapping = OntologyMapping::new();
        flatten_node_into(&mut mapping, &node);
        let leaf = mapping.get("leaf").expect("leaf entry");
        assert_eq!(leaf.len(), depth + 1);
        assert_eq!(leaf.first().map(String::as_str), Some("C0"));
        drop(node);
    }
}
