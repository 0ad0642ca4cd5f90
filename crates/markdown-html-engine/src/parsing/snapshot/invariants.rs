use crate::html::{HtmlNode, LeafNode, ParentNode};

/// Validates the construction invariants of a node tree.
///
/// Asserts that:
/// - Every parent has a tag and an explicit child list
/// - Every leaf has a value
/// - Tagless leaves carry no attributes
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(node: &HtmlNode) {
    check_at(node, "root");
}

fn check_at(node: &HtmlNode, path: &str) {
    match node {
        HtmlNode::Leaf(LeafNode {
            tag,
            value,
            attributes,
        }) => {
            assert!(value.is_some(), "leaf without value at {path}");
            assert!(
                tag.is_some() || attributes.is_empty(),
                "tagless leaf with attributes at {path}: {attributes:?}"
            );
        }
        HtmlNode::Parent(ParentNode { tag, children, .. }) => {
            let tag = tag
                .as_deref()
                .unwrap_or_else(|| panic!("parent without tag at {path}"));
            let children = children
                .as_ref()
                .unwrap_or_else(|| panic!("parent `{tag}` without children at {path}"));
            for (i, child) in children.iter().enumerate() {
                check_at(child, &format!("{path}/{tag}[{i}]"));
            }
        }
    }
}
