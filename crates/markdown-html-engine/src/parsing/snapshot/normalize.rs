use std::fmt::Write;

use crate::html::{HtmlNode, LeafNode};

/// Renders a node tree as an indented outline, one node per line.
///
/// Parents print their tag, tagged leaves print `tag "value"`, text leaves
/// print the quoted value. Attributes follow in insertion order. Values are
/// `Debug`-quoted so newlines and trailing spaces stay visible.
pub fn outline(node: &HtmlNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out.truncate(out.trim_end().len());
    out
}

fn write_node(out: &mut String, node: &HtmlNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let attrs: String = node
        .attributes()
        .iter()
        .map(|(name, value)| format!(" {name}={value:?}"))
        .collect();

    match node {
        HtmlNode::Leaf(LeafNode { tag, value, .. }) => {
            let value = value.as_deref().unwrap_or("<unset>");
            match tag {
                Some(tag) => {
                    let _ = writeln!(out, "{indent}{tag}{attrs} {value:?}");
                }
                None => {
                    let _ = writeln!(out, "{indent}{value:?}");
                }
            }
        }
        HtmlNode::Parent(parent) => {
            let tag = parent.tag.as_deref().unwrap_or("<untagged>");
            let _ = writeln!(out, "{indent}{tag}{attrs}");
            for child in node.children() {
                write_node(out, child, depth + 1);
            }
        }
    }
}
