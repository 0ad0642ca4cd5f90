use std::borrow::Cow;

use crate::options::RenderOptions;

use super::attributes::Attributes;

/// Errors raised when a node is rendered in violation of its construction
/// invariants. These point at a bug in whatever built the tree, not at the
/// markdown input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Leaf node has no value")]
    MissingValue,
    #[error("Parent node has no tag")]
    MissingTag,
    #[error("Parent node `{tag}` has no children")]
    MissingChildren { tag: String },
}

/// A leaf holds literal content. Without a tag it renders as its bare value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

/// A parent owns an ordered list of children under one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    /// `None` is unset and fails to render; `Some(vec![])` renders `<tag></tag>`.
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Attributes,
}

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// A tagged leaf, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    /// An untagged leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        })
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl std::fmt::Display,
    ) -> Self {
        self.attributes_mut().insert(name, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &mut leaf.attributes,
            HtmlNode::Parent(parent) => &mut parent.attributes,
        }
    }

    /// Children of a parent node; empty for leaves and unset children.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent(ParentNode {
                children: Some(children),
                ..
            }) => children,
            _ => &[],
        }
    }

    /// Serializes the subtree to HTML with default options.
    pub fn render(&self) -> Result<String, RenderError> {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out, options)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String, options: &RenderOptions) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out, options),
            HtmlNode::Parent(parent) => parent.write_html(out, options),
        }
    }
}

impl LeafNode {
    fn write_html(&self, out: &mut String, options: &RenderOptions) -> Result<(), RenderError> {
        let value = self.value.as_deref().ok_or(RenderError::MissingValue)?;
        let value = if options.escape_html {
            html_escape::encode_text(value)
        } else {
            Cow::Borrowed(value)
        };

        match &self.tag {
            None => out.push_str(&value),
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                out.push_str(&self.attributes.to_html(options.escape_html));
                out.push('>');
                out.push_str(&value);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        Ok(())
    }
}

impl ParentNode {
    fn write_html(&self, out: &mut String, options: &RenderOptions) -> Result<(), RenderError> {
        let tag = self.tag.as_deref().ok_or(RenderError::MissingTag)?;
        let children = self
            .children
            .as_ref()
            .ok_or_else(|| RenderError::MissingChildren {
                tag: tag.to_string(),
            })?;

        out.push('<');
        out.push_str(tag);
        out.push_str(&self.attributes.to_html(options.escape_html));
        out.push('>');
        for child in children {
            child.write_html(out, options)?;
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}
