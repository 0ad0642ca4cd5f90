/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// kind matches. Inline parsing is applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Collapses newlines and runs of whitespace to single spaces.
    pub fn content(block: &str) -> String {
        block.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
