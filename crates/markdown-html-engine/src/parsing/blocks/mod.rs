//! # Block Parsing
//!
//! Split, classify, convert.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into
//!    trimmed, non-empty blocks
//! 2. **Classification** (`classify`): each block gets exactly one
//!    `BlockKind`, first match wins
//! 3. **Construction** (`builder`): a `BlockBuilder` turns each block into an
//!    `HtmlNode` subtree and wraps them all in a root `div`
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `markdown_to_blocks`
//! - **`classify`**: `MarkdownBlockClassifier` and `block_to_block_kind`
//! - **`builder`**: `BlockBuilder` and per-kind conversion
//!
//! ## Key Invariants
//!
//! - Blocks are independent: no state carries from one block to the next
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Lists are flat; every line of a list block is one item

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use builder::{BlockBuilder, ROOT_TAG, block_to_html_node, text_to_children};
pub use classify::{MarkdownBlockClassifier, block_to_block_kind};
pub use split::{BLOCK_SEPARATOR, markdown_to_blocks};
pub use types::BlockKind;
