use crate::parsing::inline::TextSegment;

use super::node::HtmlNode;

impl From<TextSegment> for HtmlNode {
    fn from(segment: TextSegment) -> Self {
        match segment {
            TextSegment::Text(text) => HtmlNode::text(text),
            TextSegment::Bold(text) => HtmlNode::leaf("b", text),
            TextSegment::Italic(text) => HtmlNode::leaf("i", text),
            TextSegment::Code(text) => HtmlNode::leaf("code", text),
            TextSegment::Link { text, url } => {
                HtmlNode::leaf("a", text).with_attribute("href", url)
            }
            TextSegment::Image { alt, url } => HtmlNode::leaf("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", alt),
        }
    }
}
