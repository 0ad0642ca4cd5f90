//! # HTML Node Model
//!
//! A small owned tree of leaves and parents, built bottom-up by the block
//! parser and serialized once by [`HtmlNode::render`].
//!
//! - **`node`**: `HtmlNode`, `LeafNode`, `ParentNode`, `RenderError`
//! - **`attributes`**: insertion-ordered `Attributes`
//! - **`convert`**: `From<TextSegment> for HtmlNode`

pub mod attributes;
pub mod convert;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentNode, RenderError};
