/// Fenced code block. Only the bare backtick fence is recognised: the
/// opening line must be exactly ```` ``` ````, so an info string turns the
/// block into a paragraph.
pub struct CodeFence;

impl CodeFence {
    pub const OPEN: &'static str = "```\n";
    pub const CLOSE: &'static str = "```";

    pub fn matches(block: &str) -> bool {
        block.starts_with(Self::OPEN) && block.ends_with(Self::CLOSE)
    }

    /// The raw text between the fences, including its trailing newline.
    ///
    /// Each fence is removed only where present. A block accepted by
    /// [`CodeFence::matches`] has both, so nothing else is lost.
    pub fn interior(block: &str) -> &str {
        let rest = block.strip_prefix(Self::OPEN).unwrap_or(block);
        rest.strip_suffix(Self::CLOSE).unwrap_or(rest)
    }
}
