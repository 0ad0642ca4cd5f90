use std::sync::OnceLock;

use regex::Regex;

/// A `[label](url)` occurrence found in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    /// Byte offset of the first character of the match (`!` for images).
    pub start: usize,
    /// Byte offset just past the closing `)`.
    pub end: usize,
    /// Link text, or alt text for images.
    pub label: &'a str,
    pub url: &'a str,
}

/// `![alt](url)`. Alt text may not contain brackets, the URL may not contain
/// parentheses.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }

    /// Finds the first image at or after byte offset `start`.
    pub fn find_at(text: &str, start: usize) -> Option<PatternMatch<'_>> {
        let caps = Self::regex().captures_at(text, start)?;
        let whole = caps.get(0)?;
        let (_, [label, url]) = caps.extract();
        Some(PatternMatch {
            start: whole.start(),
            end: whole.end(),
            label,
            url,
        })
    }
}

/// `[text](url)`, excluding the bracket of an image.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^\(\)]*)\)";
    /// A link immediately preceded by this marker is an image, not a link.
    pub const IMAGE_MARKER: char = '!';

    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }

    /// Finds the first link at or after byte offset `start`.
    ///
    /// The regex crate has no lookbehind, so a candidate preceded by `!` is
    /// skipped and the search resumes one byte past its opening `[`.
    pub fn find_at(text: &str, start: usize) -> Option<PatternMatch<'_>> {
        let mut from = start;
        while let Some(caps) = Self::regex().captures_at(text, from) {
            let whole = caps.get(0)?;
            if text[..whole.start()].ends_with(Self::IMAGE_MARKER) {
                from = whole.start() + 1;
                continue;
            }
            let (_, [label, url]) = caps.extract();
            return Some(PatternMatch {
                start: whole.start(),
                end: whole.end(),
                label,
                url,
            });
        }
        None
    }
}
