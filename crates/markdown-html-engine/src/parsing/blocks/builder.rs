use crate::{
    html::HtmlNode,
    options::ParseOptions,
    parsing::inline::{InlineError, tokenize},
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockKind,
};

/// Tag of the container every document is wrapped in.
pub const ROOT_TAG: &str = "div";

/// Collects one subtree per block and wraps them in the root `div`.
pub struct BlockBuilder {
    options: ParseOptions,
    out: Vec<HtmlNode>,
}

impl BlockBuilder {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            out: vec![],
        }
    }

    pub fn push(&mut self, block: &str, kind: BlockKind) -> Result<(), InlineError> {
        let node = block_to_html_node(block, kind, &self.options)?;
        self.out.push(node);
        Ok(())
    }

    pub fn finish(self) -> HtmlNode {
        HtmlNode::parent(ROOT_TAG, self.out)
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Converts one classified block into its subtree.
pub fn block_to_html_node(
    block: &str,
    kind: BlockKind,
    options: &ParseOptions,
) -> Result<HtmlNode, InlineError> {
    let node = match kind {
        BlockKind::Heading { level } => {
            let tag = format!("h{}", options.heading_level(level));
            HtmlNode::parent(tag, text_to_children(Heading::content(block))?)
        }
        BlockKind::Paragraph => {
            HtmlNode::parent("p", text_to_children(&Paragraph::content(block))?)
        }
        BlockKind::Code => {
            // Raw zone: the interior skips the tokenizer entirely.
            let code = HtmlNode::leaf("code", CodeFence::interior(block));
            HtmlNode::parent("pre", vec![code])
        }
        BlockKind::Quote => {
            HtmlNode::parent("blockquote", text_to_children(&BlockQuote::content(block))?)
        }
        BlockKind::UnorderedList => list_to_html_node("ul", block, UnorderedList::item_content)?,
        BlockKind::OrderedList => list_to_html_node("ol", block, OrderedList::item_content)?,
    };
    Ok(node)
}

fn list_to_html_node(
    tag: &str,
    block: &str,
    item_content: fn(&str) -> &str,
) -> Result<HtmlNode, InlineError> {
    let items = block
        .split('\n')
        .map(|line| {
            let children = text_to_children(item_content(line))?;
            Ok(HtmlNode::parent("li", children))
        })
        .collect::<Result<Vec<_>, InlineError>>()?;
    Ok(HtmlNode::parent(tag, items))
}

/// Tokenizes inline text and converts every segment to a leaf.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    Ok(tokenize(text)?.into_iter().map(HtmlNode::from).collect())
}
