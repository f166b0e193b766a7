use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Blocks shorter than this many characters are always paragraphs.
const MIN_STRUCTURED_LEN: usize = 3;

/// Classifies a block by its first character; the first matching rule wins
/// and anything unrecognised is a paragraph.
///
/// A rule that starts to match but fails on a later line (a quote with an
/// unquoted line, a list numbered out of sequence) demotes the whole block to
/// a paragraph rather than trying another type.
pub fn classify(block: &str) -> BlockType {
    let block = block.trim();
    if block.chars().count() < MIN_STRUCTURED_LEN {
        return BlockType::Paragraph;
    }

    let block_type = match block.chars().next() {
        Some(Heading::MARKER) => Heading::level(block).map(BlockType::Heading),
        Some('`') => CodeFence::is_fenced(block).then_some(BlockType::Code),
        Some(BlockQuote::PREFIX) => BlockQuote::is_quote(block).then_some(BlockType::Quote),
        Some('-') => UnorderedList::is_list(block).then_some(BlockType::UnorderedList),
        Some('1') => OrderedList::is_list(block).then_some(BlockType::OrderedList),
        _ => None,
    };

    block_type.unwrap_or(BlockType::Paragraph)
}
