//! Text elements: paragraphs, headings, inline formatting, and links.
//!
//! Each type wraps a [`TextContainer`] and renders as its tag around the
//! container's fragment. Validity comes from the container, so a paragraph
//! whose first nested node is invalid is invalid too.

use crate::error::ArticleResult;
use crate::node::{emit_text_element, Container, Node, TextContainer, TextItem};
use crate::sink::{DocumentSink, NodeId};
use crate::validate::is_text_empty;

text_element! {
    /// Paragraph `<p>`
    Paragraph => "p"
}

text_element! {
    /// Title heading `<h1>`
    H1 => "h1"
}

text_element! {
    /// Section heading `<h2>`
    H2 => "h2"
}

text_element! {
    /// Bold run `<b>`
    Bold => "b"
}

text_element! {
    /// Italic run `<i>`
    Italic => "i"
}

// =============================================================================
// Anchor
// =============================================================================

/// Hyperlink `<a href="...">`.
///
/// Requires both an `href` and valid text.
#[derive(Debug, Default)]
pub struct Anchor {
    href: String,
    rel: Option<String>,
    text: TextContainer,
}

impl Anchor {
    pub const TAG: &'static str = "a";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// Append an item, consuming and returning the anchor
    pub fn with(mut self, item: impl Into<TextItem>) -> Self {
        self.text.append(item);
        self
    }

    pub fn append(&mut self, item: impl Into<TextItem>) -> &mut Self {
        self.text.append(item);
        self
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn rel(&self) -> Option<&str> {
        self.rel.as_deref()
    }

    pub fn children(&self) -> &[TextItem] {
        self.text.children()
    }

    pub fn plain_text(&self) -> String {
        self.text.plain_text()
    }
}

impl Node for Anchor {
    fn node_name(&self) -> &'static str {
        "Anchor"
    }

    fn is_valid(&self) -> bool {
        !is_text_empty(&self.href) && self.text.is_valid()
    }

    fn emit(&self, sink: &mut dyn DocumentSink) -> ArticleResult<NodeId> {
        let anchor = emit_text_element(Self::TAG, &self.text, sink)?;
        sink.set_attribute(anchor, "href", &self.href)?;
        if let Some(rel) = self.rel.as_deref().filter(|r| !r.is_empty()) {
            sink.set_attribute(anchor, "rel", rel)?;
        }
        Ok(anchor)
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(&self.text)
    }

    fn as_text(&self) -> Option<&TextContainer> {
        Some(&self.text)
    }
}

impl From<Anchor> for TextItem {
    fn from(anchor: Anchor) -> Self {
        TextItem::Node(Box::new(anchor))
    }
}

// =============================================================================
// Tests
// =============================================================================
