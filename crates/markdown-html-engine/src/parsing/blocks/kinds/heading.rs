/// ATX heading, `# Title` through `###### Title` (and beyond).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Number of leading `#`. Not capped at six.
    pub fn level(block: &str) -> usize {
        block.len() - block.trim_start_matches(Self::MARKER).len()
    }

    /// Heading text with the markers and surrounding whitespace removed.
    pub fn content(block: &str) -> &str {
        block.trim_start_matches(Self::MARKER).trim()
    }
}
