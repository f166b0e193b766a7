/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_list(block: &str) -> bool {
        block
            .lines()
            .all(|line| line.trim().starts_with(Self::MARKER))
    }

    /// Item text for each line, marker and surrounding whitespace removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .lines()
            .map(|line| {
                let line = line.trim();
                line.strip_prefix(Self::MARKER).unwrap_or(line).trim()
            })
            .collect()
    }
}

/// `1. item` lists numbered sequentially from one.
pub struct OrderedList;

impl OrderedList {
    /// Marker expected on the zero-based `index`th line.
    pub fn marker(index: usize) -> String {
        format!("{}. ", index + 1)
    }

    pub fn is_list(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.trim().starts_with(&Self::marker(i)))
    }

    pub fn items(block: &str) -> Vec<&str> {
        block
            .lines()
            .enumerate()
            .map(|(i, line)| {
                let line = line.trim();
                line.strip_prefix(Self::marker(i).as_str())
                    .unwrap_or(line)
                    .trim()
            })
            .collect()
    }
}
