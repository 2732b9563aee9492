//! HTML serialization for rendered markup
//!
//! Serializes subtrees of a [`MarkupDocument`] to HTML strings and offers a
//! one-shot helper that renders a [`Node`] straight to a string.

use crate::attr::Attrs;
use crate::error::{ArticleError, ArticleResult};
use crate::markup::{MarkupDocument, MarkupKind};
use crate::node::Node;
use crate::sink::NodeId;

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for HTML serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Write void elements as `<source />` instead of `<source>`.
    pub self_close_void: bool,
    /// Write `autoplay` instead of `autoplay="autoplay"` when an attribute's
    /// value equals its name.
    pub collapse_boolean_attrs: bool,
}

impl RenderConfig {
    /// XML-compatible output: self-closed voids, explicit marker values.
    pub const XHTML: Self = Self {
        self_close_void: true,
        collapse_boolean_attrs: false,
    };

    /// HTML5 shorthand: bare void tags and bare boolean attributes.
    pub const HTML: Self = Self {
        self_close_void: false,
        collapse_boolean_attrs: true,
    };

    /// Create a new config.
    pub const fn new(self_close_void: bool, collapse_boolean_attrs: bool) -> Self {
        Self {
            self_close_void,
            collapse_boolean_attrs,
        }
    }

    /// Set void element style.
    pub fn with_self_close_void(mut self, yes: bool) -> Self {
        self.self_close_void = yes;
        self
    }

    /// Set boolean attribute style.
    pub fn with_collapse_boolean_attrs(mut self, yes: bool) -> Self {
        self.collapse_boolean_attrs = yes;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::XHTML
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Render `node` into a fresh document and serialize the result.
///
/// Invalid nodes serialize to the empty string (their placeholder).
pub fn render_to_string(node: &dyn Node, config: &RenderConfig) -> ArticleResult<String> {
    let mut doc = MarkupDocument::new();
    let root = node.render(&mut doc)?;
    to_html(&doc, root, config)
}

/// Serialize the subtree rooted at `id`.
pub fn to_html(doc: &MarkupDocument, id: NodeId, config: &RenderConfig) -> ArticleResult<String> {
    let mut output = String::new();
    render_node(doc, id, config, &mut output)?;
    Ok(output)
}

fn render_node(
    doc: &MarkupDocument,
    id: NodeId,
    config: &RenderConfig,
    output: &mut String,
) -> ArticleResult<()> {
    let kind = doc.kind(id).ok_or(ArticleError::UnknownNode(id))?;

    match kind {
        MarkupKind::Text(text) => escape_html_into(text, output),
        MarkupKind::Fragment => render_children(doc, id, config, output)?,
        MarkupKind::Element { tag, attrs } => {
            output.push('<');
            output.push_str(tag);
            render_attrs(attrs, config, output);

            if is_void_element(tag) {
                output.push_str(if config.self_close_void { " />" } else { ">" });
                return Ok(());
            }

            output.push('>');
            render_children(doc, id, config, output)?;
            output.push_str("</");
            output.push_str(tag);
            output.push('>');
        }
    }
    Ok(())
}

fn render_children(
    doc: &MarkupDocument,
    id: NodeId,
    config: &RenderConfig,
    output: &mut String,
) -> ArticleResult<()> {
    for &child in doc.children(id) {
        render_node(doc, child, config, output)?;
    }
    Ok(())
}

/// Render attributes to HTML.
fn render_attrs(attrs: &Attrs, config: &RenderConfig, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        if config.collapse_boolean_attrs && name.as_str() == value.as_str() {
            continue;
        }
        output.push_str("=\"");
        escape_attr_into(value, output);
        output.push('"');
    }
}

/// Escape HTML special characters.
fn escape_html_into(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value special characters.
fn escape_attr_into(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Check if element is a void element (no closing tag).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================
