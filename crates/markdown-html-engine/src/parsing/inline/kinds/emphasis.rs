/// Strong emphasis, rendered as `<b>`.
pub struct Strong;

impl Strong {
    pub const DELIMITER: &'static str = "**";
}

/// Emphasis, rendered as `<i>`.
///
/// Only the underscore form is recognised; a single `*` is left as text.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "_";
}
