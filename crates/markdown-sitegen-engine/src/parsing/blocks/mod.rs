//! # Block Processing
//!
//! A document is handled one top-level block at a time:
//!
//! 1. **Split** (`split`): blank lines separate blocks; each is trimmed and
//!    empty ones are dropped
//! 2. **Classify** (`classify`): the first character picks a candidate type,
//!    which must hold for every line or the block falls back to a paragraph
//! 3. **Convert** (`convert`): the block becomes a `ParentNode` subtree, with
//!    inline text tokenized by [`crate::parsing::inline`]
//!
//! ## Modules
//!
//! - **`types`**: `BlockType` and `HeadingLevel`
//! - **`kinds`**: per-type syntax (Heading, CodeFence, BlockQuote, lists)
//! - **`split`**, **`classify`**, **`convert`**: the three steps above

pub mod classify;
pub mod convert;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify;
pub use convert::{block_to_node, span_to_node};
pub use split::split_into_blocks;
pub use types::{BlockType, HeadingLevel};
