use crate::{html::RenderError, parsing::inline::InlineError};

/// Any failure on the way from markdown to an HTML string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_pass_through() {
        let err: MarkdownError = RenderError::MissingValue.into();
        assert_eq!(err.to_string(), "Leaf node has no value");

        let err: MarkdownError = InlineError::MalformedInlineMarkup {
            delimiter: "_".into(),
            text: "a_b".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Unmatched delimiter `_` in: a_b");
    }
}
