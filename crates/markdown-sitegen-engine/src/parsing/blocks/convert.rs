use crate::{
    error::Result,
    html::{HtmlNode, ImageNode, LeafNode, ParentNode},
    parsing::inline::{SpanKind, TextSpan, text_to_spans},
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Converts one inline span into its HTML node.
pub fn span_to_node(span: TextSpan) -> HtmlNode {
    let TextSpan { text, kind, target } = span;
    match kind {
        SpanKind::Plain => LeafNode::text(text).into(),
        SpanKind::Bold => LeafNode::tagged("b", text).into(),
        SpanKind::Italic => LeafNode::tagged("i", text).into(),
        SpanKind::Code => LeafNode::tagged("code", text).into(),
        SpanKind::Link => LeafNode::tagged("a", text)
            .with_attribute("href", target.unwrap_or_default())
            .into(),
        SpanKind::Image => ImageNode::img(target.unwrap_or_default(), text).into(),
    }
}

/// Tokenizes `text` and converts every span to a node.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_spans(text)?.into_iter().map(span_to_node).collect())
}

/// Builds the subtree for one classified block.
///
/// Code blocks keep their content verbatim as a single `<code>` leaf inside
/// `<pre>`; every other block type runs its text through the inline tokenizer.
pub fn block_to_node(block: &str, block_type: BlockType) -> Result<ParentNode> {
    let block = block.trim();
    let tag = block_type.tag();

    let children = match block_type {
        BlockType::Code => {
            let code = TextSpan::new(CodeFence::content(block), SpanKind::Code);
            vec![span_to_node(code)]
        }
        BlockType::Heading(level) => inline_children(Heading::content(block, level))?,
        BlockType::Quote => inline_children(&BlockQuote::content(block))?,
        BlockType::UnorderedList => list_items(UnorderedList::items(block))?,
        BlockType::OrderedList => list_items(OrderedList::items(block))?,
        BlockType::Paragraph => inline_children(block.replace('\n', " ").trim())?,
    };

    Ok(ParentNode::new(tag, children))
}

fn list_items(items: Vec<&str>) -> Result<Vec<HtmlNode>> {
    items
        .into_iter()
        .map(|item| -> Result<HtmlNode> {
            Ok(ParentNode::new("li", inline_children(item)?).into())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MarkdownError, parsing::blocks::types::HeadingLevel};
    use pretty_assertions::assert_eq;

    fn render(block: &str, block_type: BlockType) -> String {
        block_to_node(block, block_type).unwrap().render().unwrap()
    }

    #[test]
    fn plain_span_becomes_untagged_leaf() {
        let node = span_to_node(TextSpan::plain("This is a text node"));
        assert_eq!(node.tag(), None);
        assert_eq!(node.render().unwrap(), "This is a text node");
    }

    #[test]
    fn styled_spans_map_to_tags() {
        for (kind, tag) in [
            (SpanKind::Bold, "b"),
            (SpanKind::Italic, "i"),
            (SpanKind::Code, "code"),
        ] {
            let node = span_to_node(TextSpan::new("x", kind));
            assert_eq!(node.tag(), Some(tag));
        }
    }

    #[test]
    fn link_span_carries_href() {
        let node = span_to_node(TextSpan::link("link", "https://example.com"));
        assert_eq!(
            node.render().unwrap(),
            r#"<a href="https://example.com">link</a>"#
        );
    }

    #[test]
    fn image_span_is_self_closing_with_src_then_alt() {
        let node = span_to_node(TextSpan::image("image", "https://img.com/img.png"));
        assert!(matches!(node, HtmlNode::Image(_)));
        assert_eq!(
            node.render().unwrap(),
            r#"<img src="https://img.com/img.png" alt="image"/>"#
        );
    }

    #[test]
    fn code_block_is_not_tokenized() {
        assert_eq!(
            render(
                "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```",
                BlockType::Code
            ),
            "<pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre>"
        );
    }

    #[test]
    fn heading_strips_markers() {
        assert_eq!(
            render("### A **bold** heading", BlockType::Heading(HeadingLevel::H3)),
            "<h3>A <b>bold</b> heading</h3>"
        );
    }

    #[test]
    fn quote_keeps_line_breaks() {
        assert_eq!(
            render("> This is a quote.\n> It has _two_ lines.", BlockType::Quote),
            "<blockquote>This is a quote.\nIt has <i>two</i> lines.</blockquote>"
        );
    }

    #[test]
    fn unordered_list_items_are_tokenized_separately() {
        assert_eq!(
            render("- Apple\n- **Banana**\n- Cherry", BlockType::UnorderedList),
            "<ul><li>Apple</li><li><b>Banana</b></li><li>Cherry</li></ul>"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            render("1. Item one\n2. Item two\n3. Item three", BlockType::OrderedList),
            "<ol><li>Item one</li><li>Item two</li><li>Item three</li></ol>"
        );
    }

    #[test]
    fn paragraph_joins_lines_with_spaces() {
        assert_eq!(
            render("This is **bolded** paragraph\ntext in a p\ntag here", BlockType::Paragraph),
            "<p>This is <b>bolded</b> paragraph text in a p tag here</p>"
        );
    }

    #[test]
    fn inline_errors_propagate() {
        let err = block_to_node("- fine\n- **broken", BlockType::UnorderedList).unwrap_err();
        assert!(matches!(err, MarkdownError::UnterminatedDelimiter { .. }));
    }
}
