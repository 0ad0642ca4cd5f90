//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a node tree to a stable, indented outline for
//!   `insta` snapshot testing
//! - **`invariants`**: Runtime checks that a tree satisfies the node
//!   construction rules (parents have tags and children, leaves have values)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
