use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

/// A `[label](url)` or `![alt](url)` match inside a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// Byte range of the whole construct, including `!` for images.
    pub range: Range<usize>,
    pub label: String,
    pub url: String,
}

/// Link and image syntax.
///
/// Labels stop at the first `]` and URLs at the first `)`, so neither can
/// span two constructs. Text that does not match exactly is left alone.
pub struct MarkdownLink;

impl MarkdownLink {
    pub const IMAGE_PREFIX: char = '!';

    fn image_regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*?)\]\(([^()]*?)\)").expect("Invalid image regex")
        })
    }

    fn link_regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*?)\]\(([^()]*?)\)").expect("Invalid link regex")
        })
    }

    /// All `![alt](url)` matches, left to right.
    pub fn images(text: &str) -> Vec<LinkMatch> {
        Self::image_regex()
            .captures_iter(text)
            .map(|caps| to_match(&caps))
            .collect()
    }

    /// All `[label](url)` matches not directly preceded by `!`, left to right.
    pub fn links(text: &str) -> Vec<LinkMatch> {
        Self::link_regex()
            .captures_iter(text)
            .map(|caps| to_match(&caps))
            .filter(|m| !text[..m.range.start].ends_with(Self::IMAGE_PREFIX))
            .collect()
    }
}

fn to_match(caps: &regex::Captures<'_>) -> LinkMatch {
    LinkMatch {
        range: caps.get(0).map_or(0..0, |m| m.range()),
        label: caps.get(1).map_or("", |m| m.as_str()).to_owned(),
        url: caps.get(2).map_or("", |m| m.as_str()).to_owned(),
    }
}
