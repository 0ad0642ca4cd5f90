use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies whole blocks.
///
/// Checks run in a fixed priority order and the first match wins: heading,
/// code fence, quote, unordered list, ordered list, then paragraph.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        if block.starts_with(Heading::MARKER) {
            BlockKind::Heading {
                level: Heading::level(block),
            }
        } else if CodeFence::matches(block) {
            BlockKind::Code
        } else if block.starts_with(BlockQuote::PREFIX) {
            BlockKind::Quote
        } else if UnorderedList::matches(block) {
            BlockKind::UnorderedList
        } else if OrderedList::matches(block) {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        }
    }
}

/// Classifies a single trimmed block.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    MarkdownBlockClassifier.classify(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Heading 1", BlockKind::Heading { level: 1 })]
    #[case("### Heading 3", BlockKind::Heading { level: 3 })]
    #[case("####### Seven", BlockKind::Heading { level: 7 })]
    #[case("```\ncode block\n```", BlockKind::Code)]
    #[case("> Quote", BlockKind::Quote)]
    #[case("- List item 1\n- List item 2", BlockKind::UnorderedList)]
    #[case("1. First item\n2. Second item", BlockKind::OrderedList)]
    #[case("1. Only item", BlockKind::OrderedList)]
    #[case("1. First item\n2. Second item\n1. Third item", BlockKind::Paragraph)]
    #[case("This is a simple paragraph.", BlockKind::Paragraph)]
    #[case("-not a list", BlockKind::Paragraph)]
    #[case("```rust\nlet x = 1;\n```", BlockKind::Paragraph)]
    fn classifies(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(block_to_block_kind(block), expected);
    }

    #[test]
    fn heading_wins_over_everything() {
        assert_eq!(
            block_to_block_kind("#\n- a\n- b"),
            BlockKind::Heading { level: 1 }
        );
    }

    #[test]
    fn fence_wins_over_quote_content() {
        let block = "```\n> not a quote\n```";
        assert_eq!(block_to_block_kind(block), BlockKind::Code);
    }
}
