/// Blockquote block: every line starts with `>`.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    pub fn is_quote(block: &str) -> bool {
        block
            .lines()
            .all(|line| line.trim().starts_with(Self::PREFIX))
    }

    /// Removes the `>` marker and one following space from each line,
    /// keeping the line breaks between them. A bare `>` line becomes an
    /// empty line rather than a literal `>`.
    pub fn content(block: &str) -> String {
        block
            .lines()
            .map(|line| {
                let line = line.trim_start();
                let line = line.strip_prefix(Self::PREFIX).unwrap_or(line);
                line.strip_prefix(' ').unwrap_or(line)
            })
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}
