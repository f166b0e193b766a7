use crate::parsing::blocks::types::HeadingLevel;

/// ATX heading syntax: one to six `#` followed by a single space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Heading level of a block, or `None` when the marker run is too long,
    /// empty, or not followed by a space.
    pub fn level(block: &str) -> Option<HeadingLevel> {
        let hashes = block.chars().take_while(|c| *c == Self::MARKER).count();
        let level = HeadingLevel::from_marker_count(hashes)?;
        block[hashes..].starts_with(' ').then_some(level)
    }

    /// Heading text with the `#` run and surrounding whitespace removed.
    pub fn content(block: &str, level: HeadingLevel) -> &str {
        block.get(level.marker_count()..).unwrap_or_default().trim()
    }
}
