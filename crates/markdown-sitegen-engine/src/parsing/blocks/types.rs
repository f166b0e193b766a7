/// Heading depth, `#` through `######`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Maps a count of leading `#` characters to a level; `None` outside 1..=6.
    pub fn from_marker_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    /// Number of `#` characters that introduce this level.
    pub fn marker_count(self) -> usize {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

/// Structural type of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// Default when no other rule matches.
    Paragraph,
    Heading(HeadingLevel),
    /// Triple-backtick fenced code.
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockType {
    /// Tag of the element wrapping the whole block.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Heading(level) => level.tag(),
            Self::Code => "pre",
            Self::Quote => "blockquote",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
        }
    }
}
