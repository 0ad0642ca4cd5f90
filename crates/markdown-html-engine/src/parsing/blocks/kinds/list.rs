/// `- item` lists. Every line of the block is one item.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(block: &str) -> bool {
        block.starts_with(Self::MARKER)
    }

    /// Drops the two marker characters and trims. Only the first line of a
    /// block is checked for the marker, so later lines lose their first two
    /// characters whatever they are.
    pub fn item_content(line: &str) -> &str {
        let marker_len = Self::MARKER.chars().count();
        line.char_indices()
            .nth(marker_len)
            .map_or("", |(i, _)| &line[i..])
            .trim()
    }
}

/// `1. item` lists, numbered from one without gaps.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// A single digit followed by `. ` opens a candidate ordered list.
    pub fn is_candidate(block: &str) -> bool {
        block.chars().next().is_some_and(|c| c.is_ascii_digit())
            && block[1..].starts_with(Self::SEPARATOR)
    }

    /// Candidate blocks spanning several lines must number them `1. `, `2. `,
    /// ... in order. A single line is accepted whatever its digit.
    pub fn matches(block: &str) -> bool {
        if !Self::is_candidate(block) {
            return false;
        }
        if !block.contains('\n') {
            return true;
        }
        block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}{}", i + 1, Self::SEPARATOR)))
    }

    /// Everything after the first `.`, trimmed.
    pub fn item_content(line: &str) -> &str {
        line.split_once('.').map_or(line, |(_, rest)| rest).trim()
    }
}
