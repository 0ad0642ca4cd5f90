//! Converts a small markdown dialect into an HTML node tree and renders it.
//!
//! ```
//! let html = markdown_html_engine::markdown_to_html("# Hi\n\nsome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hi</h1><p>some <b>bold</b> text</p></div>");
//! ```

pub mod error;
pub mod html;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use error::MarkdownError;
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode, RenderError};
pub use options::{Options, ParseOptions, RenderOptions};
pub use parsing::{
    blocks::{BlockKind, block_to_block_kind, block_to_html_node, markdown_to_blocks},
    inline::{InlineError, TextKind, TextSegment, tokenize},
    markdown_to_html,
    markdown_to_html_node,
    markdown_to_html_node_with,
    markdown_to_html_with,
};
