pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use crate::{
    error::MarkdownError,
    html::HtmlNode,
    options::{Options, ParseOptions},
};

use blocks::{BlockBuilder, MarkdownBlockClassifier, markdown_to_blocks};

/// Parses a document into a root `div` with one child per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, MarkdownError> {
    markdown_to_html_node_with(markdown, &ParseOptions::default())
}

pub fn markdown_to_html_node_with(
    markdown: &str,
    options: &ParseOptions,
) -> Result<HtmlNode, MarkdownError> {
    let classifier = MarkdownBlockClassifier;
    let mut builder = BlockBuilder::new(*options);

    for (index, block) in markdown_to_blocks(markdown).into_iter().enumerate() {
        let kind = classifier.classify(block);
        log::debug!("block {index}: {kind:?}");
        builder.push(block, kind)?;
    }

    Ok(builder.finish())
}

/// Parses and renders a document with default options.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_with(markdown, &Options::default())
}

pub fn markdown_to_html_with(markdown: &str, options: &Options) -> Result<String, MarkdownError> {
    let root = markdown_to_html_node_with(markdown, &options.parse)?;
    Ok(root.render_with(&options.render)?)
}
