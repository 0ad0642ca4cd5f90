/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": they are split out first, so nothing inside
/// them is ever read as emphasis, a link or an image.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
