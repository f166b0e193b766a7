use std::path::{Path, PathBuf};

use crate::io::read_file;

use super::SiteError;

/// Page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    /// Attributes whose root-relative values are rewritten to the site's
    /// base path.
    const LINK_ATTRIBUTES: [&'static str; 2] = ["href=\"", "src=\""];

    pub fn new(source: impl Into<String>) -> Result<Self, SiteError> {
        Self::parse(source.into(), PathBuf::from("<inline>"))
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let source = read_file(path)?;
        Self::parse(source, path.to_path_buf())
    }

    fn parse(source: String, path: PathBuf) -> Result<Self, SiteError> {
        for placeholder in [Self::TITLE, Self::CONTENT] {
            if !source.contains(placeholder) {
                return Err(SiteError::InvalidTemplate { path, placeholder });
            }
        }
        Ok(Self { source })
    }

    /// Fills in both placeholders, then points root-relative `href`/`src`
    /// attributes at `base_path`. Protocol-relative values (`//host/...`)
    /// are left alone.
    pub fn render(&self, title: &str, content: &str, base_path: &str) -> String {
        let mut page = self
            .source
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content);

        for attr in Self::LINK_ATTRIBUTES {
            page = rebase(&page, attr, base_path);
        }
        page
    }
}

fn rebase(page: &str, attr: &str, base_path: &str) -> String {
    let mut rebased = String::with_capacity(page.len());
    let mut rest = page;
    while let Some(pos) = rest.find(attr) {
        let value_start = pos + attr.len();
        rebased.push_str(&rest[..value_start]);
        rest = &rest[value_start..];

        match rest.strip_prefix('/') {
            Some(path) if !path.starts_with('/') => {
                rebased.push_str(base_path);
                rest = path;
            }
            _ => {}
        }
    }
    rebased.push_str(rest);
    rebased
}
