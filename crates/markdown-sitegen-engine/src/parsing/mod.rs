pub mod blocks;
pub mod inline;

use std::borrow::Cow;

use crate::{
    error::{MarkdownError, Result},
    html::{HtmlNode, ParentNode},
};

use blocks::{block_to_node, classify, split_into_blocks};

/// Tag of the root element every document is assembled under.
pub const ROOT_TAG: &str = "div";

/// Converts a whole document into a `<div>` rooted node tree.
///
/// Blocks are converted in document order and appended to the root. The
/// first inline error aborts the conversion.
pub fn document_to_tree(document: &str) -> Result<ParentNode> {
    let document = normalize_line_endings(document);
    let mut root = ParentNode::new(ROOT_TAG, Vec::new());

    for block in split_into_blocks(&document) {
        let block_type = classify(block);
        log::trace!("classified block as {block_type:?}: {:?}", preview(block));
        root.push(block_to_node(block, block_type)?);
    }

    Ok(root)
}

/// Plain text of the first top-level `<h1>`, with inline markup removed.
///
/// Only direct children of the root are considered, so a heading can never
/// come from inside a list or quote.
pub fn extract_title(tree: &ParentNode) -> Result<String> {
    tree.children()
        .iter()
        .find(|child| matches!(child, HtmlNode::Parent(_)) && child.tag() == Some("h1"))
        .map(HtmlNode::text_content)
        .ok_or(MarkdownError::NoTitleFound)
}

fn normalize_line_endings(document: &str) -> Cow<'_, str> {
    if document.contains('\r') {
        Cow::Owned(document.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(document)
    }
}

fn preview(block: &str) -> &str {
    let end = block
        .char_indices()
        .nth(40)
        .map_or(block.len(), |(idx, _)| idx);
    &block[..end]
}
