use std::fmt;
use std::str::FromStr;

/// A run of inline text tagged with its formatting.
///
/// Only `Link` and `Image` carry a destination URL, so a URL can never be
/// attached to plain or emphasised text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    /// Literal text with no formatting.
    Text(String),
    /// `**bold**`
    Bold(String),
    /// `_italic_`
    Italic(String),
    /// `` `code` ``. A raw zone: nothing inside is interpreted.
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl TextSegment {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    /// Returns the formatting kind without its payload.
    pub fn kind(&self) -> TextKind {
        match self {
            TextSegment::Text(_) => TextKind::Text,
            TextSegment::Bold(_) => TextKind::Bold,
            TextSegment::Italic(_) => TextKind::Italic,
            TextSegment::Code(_) => TextKind::Code,
            TextSegment::Link { .. } => TextKind::Link,
            TextSegment::Image { .. } => TextKind::Image,
        }
    }

    /// The visible text of the segment (alt text for images).
    pub fn content(&self) -> &str {
        match self {
            TextSegment::Text(s)
            | TextSegment::Bold(s)
            | TextSegment::Italic(s)
            | TextSegment::Code(s) => s,
            TextSegment::Link { text, .. } => text,
            TextSegment::Image { alt, .. } => alt,
        }
    }

    /// The destination URL, present only for links and images.
    pub fn url(&self) -> Option<&str> {
        match self {
            TextSegment::Link { url, .. } | TextSegment::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// Payload-free discriminant of [`TextSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextKind {
    pub const ALL: [TextKind; 6] = [
        TextKind::Text,
        TextKind::Bold,
        TextKind::Italic,
        TextKind::Code,
        TextKind::Link,
        TextKind::Image,
    ];

    /// Canonical lowercase name, as accepted by [`TextKind::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            TextKind::Text => "text",
            TextKind::Bold => "bold",
            TextKind::Italic => "italic",
            TextKind::Code => "code",
            TextKind::Link => "link",
            TextKind::Image => "image",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A kind name that does not correspond to any [`TextKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported segment kind: {0}")]
pub struct UnsupportedSegmentKind(pub String);

impl FromStr for TextKind {
    type Err = UnsupportedSegmentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnsupportedSegmentKind(s.to_string()))
    }
}
