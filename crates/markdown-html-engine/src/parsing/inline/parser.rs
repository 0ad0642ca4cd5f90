use super::{
    kinds::{CodeSpan, Emphasis, Image, Link, PatternMatch, Strong},
    types::TextSegment,
};

/// Errors raised while tokenizing inline markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    /// A delimiter appeared an odd number of times in a run of plain text.
    #[error("Unmatched delimiter `{delimiter}` in: {text}")]
    MalformedInlineMarkup { delimiter: String, text: String },
}

/// Tokenizes a run of inline text into [`TextSegment`]s.
///
/// Passes run in a fixed order, each re-splitting only the plain segments
/// left by the previous one:
///
/// 1. code spans (raw zones, so markup inside backticks is never read)
/// 2. images
/// 3. links
/// 4. `**` bold
/// 5. `_` italic
///
/// An unmatched delimiter fails the whole call.
pub fn tokenize(text: &str) -> Result<Vec<TextSegment>, InlineError> {
    if text.is_empty() {
        return Ok(vec![]);
    }

    let segments = vec![TextSegment::text(text)];
    let segments = split_delimiter(segments, CodeSpan::TICK, TextSegment::Code)?;
    let segments = split_images(segments);
    let segments = split_links(segments);
    let segments = split_delimiter(segments, Strong::DELIMITER, TextSegment::Bold)?;
    let segments = split_delimiter(segments, Emphasis::DELIMITER, TextSegment::Italic)?;

    log::trace!(
        "tokenized {} bytes into {} segments",
        text.len(),
        segments.len()
    );
    Ok(segments)
}

/// Splits plain segments on `delimiter`, wrapping every odd-indexed piece.
///
/// Non-plain segments pass through untouched. Empty plain pieces are dropped,
/// empty wrapped pieces are kept.
pub fn split_delimiter(
    segments: Vec<TextSegment>,
    delimiter: &str,
    wrap: fn(String) -> TextSegment,
) -> Result<Vec<TextSegment>, InlineError> {
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        let TextSegment::Text(text) = segment else {
            out.push(segment);
            continue;
        };
        if !text.contains(delimiter) {
            out.push(TextSegment::Text(text));
            continue;
        }

        let pieces: Vec<&str> = text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(InlineError::MalformedInlineMarkup {
                delimiter: delimiter.to_string(),
                text: text.clone(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if i % 2 == 1 {
                out.push(wrap(piece.to_string()));
            } else if !piece.is_empty() {
                out.push(TextSegment::text(piece));
            }
        }
    }

    Ok(out)
}

/// Splits `![alt](url)` images out of plain segments.
pub fn split_images(segments: Vec<TextSegment>) -> Vec<TextSegment> {
    split_pattern(segments, Image::find_at, |alt, url| {
        TextSegment::image(alt, url)
    })
}

/// Splits `[text](url)` links out of plain segments.
pub fn split_links(segments: Vec<TextSegment>) -> Vec<TextSegment> {
    split_pattern(segments, Link::find_at, |text, url| {
        TextSegment::link(text, url)
    })
}

/// Returns `(alt, url)` for every image in `text`, in order.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    collect_matches(text, Image::find_at)
}

/// Returns `(text, url)` for every link in `text`, in order. Images are not
/// reported as links.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    collect_matches(text, Link::find_at)
}

type Finder = for<'a> fn(&'a str, usize) -> Option<PatternMatch<'a>>;

fn collect_matches(text: &str, find: Finder) -> Vec<(&str, &str)> {
    let mut out = vec![];
    let mut pos = 0;
    while let Some(m) = find(text, pos) {
        out.push((m.label, m.url));
        pos = m.end;
    }
    out
}

fn split_pattern(
    segments: Vec<TextSegment>,
    find: Finder,
    wrap: fn(&str, &str) -> TextSegment,
) -> Vec<TextSegment> {
    let mut out = Vec::with_capacity(segments.len());

    for segment in segments {
        let TextSegment::Text(text) = segment else {
            out.push(segment);
            continue;
        };

        let mut pos = 0;
        while let Some(m) = find(&text, pos) {
            if m.start > pos {
                out.push(TextSegment::text(&text[pos..m.start]));
            }
            out.push(wrap(m.label, m.url));
            pos = m.end;
        }
        if pos < text.len() {
            out.push(TextSegment::text(&text[pos..]));
        }
    }

    out
}
