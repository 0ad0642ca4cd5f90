use serde::{Deserialize, Serialize};

/// Options that change how blocks are turned into nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Emit `h6` for headings with more than six `#`. Off by default, so
    /// `####### x` becomes `<h7>`.
    pub clamp_heading_level: bool,
}

impl ParseOptions {
    pub const MAX_HEADING_LEVEL: usize = 6;

    pub fn heading_level(&self, level: usize) -> usize {
        if self.clamp_heading_level {
            level.min(Self::MAX_HEADING_LEVEL)
        } else {
            level
        }
    }
}

/// Options that change how a node tree is serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// HTML-escape leaf values and attribute values.
    pub escape_html: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub parse: ParseOptions,
    pub render: RenderOptions,
}
