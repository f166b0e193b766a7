//! Markdown to HTML conversion for a constrained Markdown dialect.
//!
//! The pipeline is pure and synchronous: [`parsing::document_to_tree`] builds
//! an [`html::ParentNode`] tree which renders to a string, and
//! [`parsing::extract_title`] pulls the page title out of that tree. The
//! [`site`] module wraps both with the filesystem work needed to build a
//! static site.

pub mod error;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{MarkdownError, Result};
pub use html::{Attributes, HtmlNode, ImageNode, LeafNode, ParentNode};
pub use parsing::{document_to_tree, extract_title};

/// Renders a whole document straight to its HTML body.
pub fn markdown_to_html(document: &str) -> Result<String> {
    document_to_tree(document)?.render()
}
