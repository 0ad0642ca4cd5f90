/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one `>` and the whitespace around the rest of the line.
    ///
    /// Returns `None` for lines without the prefix; those lines are dropped
    /// from the quote.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }

    /// Joins the stripped lines of a quote block with single spaces.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .filter_map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}
