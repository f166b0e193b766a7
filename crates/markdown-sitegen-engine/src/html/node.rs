use crate::error::{MarkdownError, Result};

use super::attributes::Attributes;

/// An HTML element in the document tree.
///
/// Tags are fixed at construction; only a [`ParentNode`]'s child list can grow
/// afterwards. Absence is explicit: `None` for a tag means "no wrapping
/// element", while an empty-string value is still a present value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Terminal text, optionally wrapped in an element.
    Leaf(LeafNode),
    /// Self-closing element such as `<img/>`.
    Image(ImageNode),
    /// Element whose content is entirely its ordered children.
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(n) => n.tag(),
            HtmlNode::Image(n) => n.tag(),
            HtmlNode::Parent(n) => n.tag(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(n) => n.attributes(),
            HtmlNode::Image(n) => n.attributes(),
            HtmlNode::Parent(n) => n.attributes(),
        }
    }

    pub fn render_attributes(&self) -> String {
        self.attributes().render()
    }

    pub fn render_open_tag(&self) -> String {
        open_tag(self.tag(), self.attributes())
    }

    pub fn render_close_tag(&self) -> String {
        close_tag(self.tag())
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Appends this node's HTML to `out`. On error `out` may hold a partial render.
    pub fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf(n) => n.render_into(out),
            HtmlNode::Image(n) => n.render_into(out),
            HtmlNode::Parent(n) => n.render_into(out),
        }
    }

    /// Concatenated values of every leaf below this node, with all markup dropped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(n) => out.push_str(n.value().unwrap_or_default()),
            HtmlNode::Image(n) => out.push_str(n.value().unwrap_or_default()),
            HtmlNode::Parent(n) => {
                for child in n.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(node: LeafNode) -> Self {
        HtmlNode::Leaf(node)
    }
}

impl From<ImageNode> for HtmlNode {
    fn from(node: ImageNode) -> Self {
        HtmlNode::Image(node)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(node: ParentNode) -> Self {
        HtmlNode::Parent(node)
    }
}

fn open_tag(tag: Option<&str>, attributes: &Attributes) -> String {
    match tag {
        Some(tag) => format!("<{tag}{}>", attributes.render()),
        None => String::new(),
    }
}

fn close_tag(tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("</{tag}>"),
        None => String::new(),
    }
}

/// Text content with an optional wrapping tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: Option<String>,
    attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Bare text with no wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn tagged(tag: &str, value: impl Into<String>) -> Self {
        Self::new(Some(tag), value)
    }

    /// A leaf whose value was never set. Rendering it fails.
    pub fn without_value(tag: Option<&str>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        let value = self.value.as_deref().ok_or_else(|| MarkdownError::MissingValue {
            tag: self.tag.clone(),
        })?;
        out.push_str(&open_tag(self.tag(), &self.attributes));
        out.push_str(value);
        out.push_str(&close_tag(self.tag()));
        Ok(())
    }
}

/// Self-closing leaf. Its value is informational and never emitted when tagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageNode {
    tag: Option<String>,
    value: Option<String>,
    attributes: Attributes,
}

impl ImageNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// `<img src=".." alt=".."/>` with an empty value.
    pub fn img(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(Some("img"), "")
            .with_attribute("src", src)
            .with_attribute("alt", alt)
    }

    pub fn without_value(tag: Option<&str>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        let value = self.value.as_deref().ok_or_else(|| MarkdownError::MissingValue {
            tag: self.tag.clone(),
        })?;
        match self.tag() {
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                out.push_str(&self.attributes.render());
                out.push_str("/>");
            }
            None => out.push_str(value),
        }
        Ok(())
    }
}

/// Structural element owning its children exclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    tag: Option<String>,
    children: Option<Vec<HtmlNode>>,
    attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_owned()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    /// Builds a node that may be missing its tag or children; used to model
    /// incomplete trees, which fail at render time.
    pub fn from_parts(tag: Option<&str>, children: Option<Vec<HtmlNode>>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn push(&mut self, child: impl Into<HtmlNode>) {
        self.children.get_or_insert_with(Vec::new).push(child.into());
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn children(&self) -> &[HtmlNode] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        let tag = self.tag.as_deref().ok_or(MarkdownError::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .ok_or_else(|| MarkdownError::MissingChildren {
                tag: tag.to_owned(),
            })?;

        out.push_str(&open_tag(Some(tag), &self.attributes));
        for child in children {
            child.render_into(out)?;
        }
        out.push_str(&close_tag(Some(tag)));
        Ok(())
    }
}
