//! # Inline Parsing
//!
//! Delimiter-pass tokenizer for the text inside a block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the extracted
//! text of inline-eligible blocks (paragraphs, headings, quotes, list items).
//! Fenced code blocks never reach it.
//!
//! The tokenizer is a fixed sequence of passes over a `Vec<TextSegment>`.
//! Each pass only re-splits `TextSegment::Text`; anything already claimed
//! by an earlier pass is left alone. That ordering is what makes code spans
//! raw zones and keeps `![..](..)` from being read as a link.
//!
//! ## Modules
//!
//! - **`types`**: `TextSegment` enum and its payload-free `TextKind`
//! - **`kinds`**: Inline types with owned delimiters and patterns
//! - **`parser`**: `tokenize()` main entry point and the individual passes

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{
    InlineError, extract_images, extract_links, split_delimiter, split_images, split_links,
    tokenize,
};
pub use types::{TextKind, TextSegment, UnsupportedSegmentKind};
