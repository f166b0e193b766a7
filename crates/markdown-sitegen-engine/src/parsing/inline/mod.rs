//! # Inline Tokenizer
//!
//! Turns a run of text into ordered [`TextSpan`]s (plain, bold, italic, code,
//! link, image).
//!
//! ## Pass order
//!
//! 1. `![alt](url)` images
//! 2. `[label](url)` links not preceded by `!`
//! 3. `` ` `` code, 4. `**` bold, 5. `_` italic
//!
//! Each pass only rewrites spans still marked plain, so styles never nest:
//! `` `**x**` `` is a code span containing literal asterisks.
//!
//! Unclosed delimiters are errors; malformed links and images are plain text.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::text_to_spans;
pub use types::{SpanKind, TextSpan};
