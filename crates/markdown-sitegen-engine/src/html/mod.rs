//! # HTML Node Model
//!
//! A minimal element tree that renders itself to HTML text. It knows nothing
//! about Markdown; the block processor builds it bottom-up.
//!
//! - **`attributes`**: ordered `key="value"` pairs
//! - **`node`**: `HtmlNode` with its three variants (`LeafNode`, `ImageNode`, `ParentNode`)
//!
//! Values and attributes are emitted verbatim; no escaping is performed.

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, ImageNode, LeafNode, ParentNode};
