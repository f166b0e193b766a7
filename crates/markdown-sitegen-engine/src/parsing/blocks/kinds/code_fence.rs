/// Triple-backtick fenced code block.
///
/// The whole block must be the fence: it opens and closes with three
/// backticks and has something in between.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    pub fn is_fenced(block: &str) -> bool {
        block.chars().count() > 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// Raw text between the fences, minus one leading newline.
    ///
    /// Callers must have checked [`CodeFence::is_fenced`].
    pub fn content(block: &str) -> &str {
        let inner = block
            .get(Self::FENCE.len()..block.len().saturating_sub(Self::FENCE.len()))
            .unwrap_or_default();
        inner.strip_prefix('\n').unwrap_or(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_fenced_block() {
        assert!(CodeFence::is_fenced("```\nprint('hello')\n```"));
        assert!(CodeFence::is_fenced("```x```"));
    }

    #[test]
    fn rejects_unfenced_or_empty_blocks() {
        assert!(!CodeFence::is_fenced("``````"));
        assert!(!CodeFence::is_fenced("```\nno closing fence"));
        assert!(!CodeFence::is_fenced("`inline` code"));
    }

    #[test]
    fn content_drops_one_leading_newline() {
        assert_eq!(CodeFence::content("```\ncode here\n```"), "code here\n");
        assert_eq!(CodeFence::content("```\n\ntwo\n```"), "\ntwo\n");
        assert_eq!(CodeFence::content("```inline```"), "inline");
    }
}
