//! # Block Kinds
//!
//! Each block type owns its syntax here: detection (`is_*`/`level`) and the
//! marker stripping used when building its node. The classifier and the
//! converter call into these; neither hardcodes `#`, `>` or `- `.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
