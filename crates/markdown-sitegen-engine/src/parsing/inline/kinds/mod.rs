//! # Inline Kinds
//!
//! Inline syntax owns its delimiters here; the parser only refers to these
//! constants and never hardcodes `**` or `![`.
//!
//! - **`Delimited`**: paired markers (`` ` ``, `**`, `_`) and their span kinds
//! - **`MarkdownLink`**: `[label](url)` and `![alt](url)` extraction

pub mod delimited;
pub mod link;

pub use delimited::Delimited;
pub use link::{LinkMatch, MarkdownLink};
