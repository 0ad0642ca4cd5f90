//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`CodeSpan`**: backtick raw zone that suppresses other parsing
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)` not preceded by `!`
//! - **`Strong`**: `DELIMITER = "**"`
//! - **`Emphasis`**: `DELIMITER = "_"`
//!
//! The tokenizer calls these; it never hardcodes a delimiter itself.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::{Image, Link, PatternMatch};
