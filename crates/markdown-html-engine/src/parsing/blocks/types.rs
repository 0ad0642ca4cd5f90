/// The kind of a block, decided from its text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#` heading with the number of leading markers.
    Heading { level: usize },
    /// A backtick-fenced code block. A raw zone: no inline parsing inside.
    Code,
    /// Lines prefixed with `>`.
    Quote,
    /// Lines prefixed with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ...
    OrderedList,
    /// The fallback when nothing else matches.
    Paragraph,
}
