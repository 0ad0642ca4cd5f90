//! Document-level tests for the parsing module.
//!
//! Each test drives the full pipeline and checks the tree invariants before
//! asserting on rendered output or on the outline.

use pretty_assertions::assert_eq;

use crate::{
    error::MarkdownError,
    html::HtmlNode,
    options::{Options, ParseOptions, RenderOptions},
    parsing::{
        inline::InlineError, markdown_to_html, markdown_to_html_node, markdown_to_html_node_with,
        markdown_to_html_with, snapshot,
    },
};

fn parse(md: &str) -> HtmlNode {
    let root = markdown_to_html_node(md).unwrap();
    snapshot::invariants(&root);
    root
}

#[test]
fn paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    assert_eq!(
        parse(md).render().unwrap(),
        "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn code_block() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        parse(md).render().unwrap(),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn lists() {
    let md = "
- This is a list
- with items
- and _more_ items

1. This is an `ordered` list
2. with items
3. and more items
";
    assert_eq!(
        parse(md).render().unwrap(),
        "<div><ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul><ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol></div>"
    );
}

#[test]
fn quote() {
    let md = "
> This is a
> blockquote block

this is paragraph text
";
    assert_eq!(
        parse(md).render().unwrap(),
        "<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
    );
}

#[test]
fn heading_levels() {
    assert_eq!(
        parse("# One\n\n### Three").render().unwrap(),
        "<div><h1>One</h1><h3>Three</h3></div>"
    );
}

#[test]
fn deep_heading_follows_options() {
    let md = "######## deep";
    assert_eq!(parse(md).render().unwrap(), "<div><h8>deep</h8></div>");

    let clamped = markdown_to_html_node_with(
        md,
        &ParseOptions {
            clamp_heading_level: true,
        },
    )
    .unwrap();
    assert_eq!(clamped.render().unwrap(), "<div><h6>deep</h6></div>");
}

#[test]
fn empty_document_is_empty_root() {
    assert_eq!(parse("").render().unwrap(), "<div></div>");
}

#[test]
fn blank_lines_only() {
    assert_eq!(parse("\n\n\n").children().len(), 0);
}

#[test]
fn whitespace_only_blocks_are_skipped() {
    assert_eq!(parse("a\n\n   \n\nb").children().len(), 2);
}

#[test]
fn raw_zones_suppress_inline_parsing() {
    let root = parse("`[not a link](x)`");
    let p = &root.children()[0];
    assert_eq!(p.children().len(), 1);
    assert_eq!(p.children()[0].tag(), Some("code"));
}

#[test]
fn unclosed_construct_fails_the_document() {
    let err = markdown_to_html_node("fine\n\nthis is **broken").unwrap_err();
    assert!(matches!(
        err,
        MarkdownError::Inline(InlineError::MalformedInlineMarkup { .. })
    ));
}

#[test]
fn unclosed_construct_inside_code_block_is_fine() {
    assert!(markdown_to_html_node("```\n**open\n```").is_ok());
}

#[test]
fn links_and_images_carry_attributes() {
    let root = parse("see [docs](https://a.dev) and ![logo](/l.png)");
    let p = &root.children()[0];
    let link = &p.children()[1];
    assert_eq!(link.attributes().get("href"), Some("https://a.dev"));
    let img = &p.children()[3];
    assert_eq!(img.tag(), Some("img"));
    assert_eq!(img.attributes().get("src"), Some("/l.png"));
    assert_eq!(img.attributes().get("alt"), Some("logo"));
}

#[test]
fn outline_of_mixed_document() {
    let root = parse("## Title with `code`\n\n- [x](u)\n- _y_");
    insta::assert_snapshot!(snapshot::outline(&root), @r#"
    div
      h2
        "Title with "
        code "code"
      ul
        li
          a href="u" "x"
        li
          i "y"
    "#);
}

#[test]
fn string_entry_points_agree_with_tree() {
    let md = "# A\n\nb _c_";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        markdown_to_html_node(md).unwrap().render().unwrap()
    );
}

#[test]
fn escaping_through_options() {
    let options = Options {
        parse: ParseOptions::default(),
        render: RenderOptions { escape_html: true },
    };
    assert_eq!(
        markdown_to_html_with("a < b", &options).unwrap(),
        "<div><p>a &lt; b</p></div>"
    );
}
