/// Separator between top-level blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks on blank lines.
///
/// Runs of more than two newlines count as a single separator, so leading,
/// trailing or repeated blank regions never produce empty blocks.
pub fn split_into_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
