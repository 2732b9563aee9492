//! Content node contract
//!
//! Every article node implements [`Node`]: it can answer whether it holds
//! enough data to be meaningful, and it can render itself into a
//! [`DocumentSink`].
//!
//! # Fail soft, never omit
//!
//! [`Node::render`] checks validity first. An invalid node does not emit its
//! normal structure; it emits the [`placeholder`] instead. The placeholder
//! contributes exactly one empty text child to whatever it is appended to,
//! so a parent's child count and ordering do not depend on the validity of
//! its children.
//!
//! # Capabilities
//!
//! Nodes advertise optional capabilities through [`Node::as_container`]
//! (structured children) and [`Node::as_text`] (a backing
//! [`TextContainer`]). Leaves keep the `None` defaults.

mod text;

pub use text::{TextContainer, TextItem};

use std::fmt;

use crate::error::ArticleResult;
use crate::sink::{DocumentSink, NodeId};

// =============================================================================
// Node
// =============================================================================

/// Common contract of all content nodes.
pub trait Node: fmt::Debug + Send + Sync {
    /// Short type name used in diagnostics
    fn node_name(&self) -> &'static str;

    /// Whether the node holds enough data to render its normal structure.
    ///
    /// Must be free of side effects and reflect the current state.
    fn is_valid(&self) -> bool;

    /// Emit the node's normal structure, ignoring validity.
    ///
    /// Callers should go through [`Node::render`].
    fn emit(&self, sink: &mut dyn DocumentSink) -> ArticleResult<NodeId>;

    /// Render the node, falling back to the [`placeholder`] when invalid.
    fn render(&self, sink: &mut dyn DocumentSink) -> ArticleResult<NodeId> {
        if !self.is_valid() {
            debug!(node = self.node_name(), "invalid node rendered as placeholder");
            return placeholder(sink);
        }
        self.emit(sink)
    }

    /// Structured-children capability
    fn as_container(&self) -> Option<&dyn Container> {
        None
    }

    /// Text capability: the container backing this node, if any
    fn as_text(&self) -> Option<&TextContainer> {
        None
    }
}

/// Capability of nodes holding structured children.
pub trait Container {
    /// Child nodes in order, without bare text runs
    fn container_children(&self) -> Vec<&dyn Node>;
}

// =============================================================================
// Rendering helpers
// =============================================================================

/// Emit the neutral placeholder: a fragment holding one empty text node.
pub fn placeholder(sink: &mut dyn DocumentSink) -> ArticleResult<NodeId> {
    let fragment = sink.create_fragment()?;
    let empty = sink.create_text_node("")?;
    sink.append_child(fragment, empty)?;
    Ok(fragment)
}

/// Emit `<tag>` holding the fragment of `text`.
pub fn emit_text_element(
    tag: &str,
    text: &TextContainer,
    sink: &mut dyn DocumentSink,
) -> ArticleResult<NodeId> {
    let element = sink.create_element(tag)?;
    let fragment = text.render_fragment(sink)?;
    sink.append_child(element, fragment)?;
    Ok(element)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkupDocument;

    static_assertions::assert_obj_safe!(Node, Container);

    /// Leaf that is valid iff it has a label
    #[derive(Debug, Default)]
    struct Marker {
        label: String,
    }

    impl Node for Marker {
        fn node_name(&self) -> &'static str {
            "Marker"
        }

        fn is_valid(&self) -> bool {
            !self.label.is_empty()
        }

        fn emit(&self, sink: &mut dyn DocumentSink) -> ArticleResult<NodeId> {
            let el = sink.create_element("mark")?;
            sink.set_attribute(el, "data-label", &self.label)?;
            Ok(el)
        }
    }

    #[test]
    fn test_invalid_node_renders_placeholder() {
        let mut doc = MarkupDocument::new();
        let id = Marker::default().render(&mut doc).unwrap();

        assert!(doc.is_fragment(id));
        let children = doc.children(id);
        assert_eq!(children.len(), 1);
        assert_eq!(doc.text(children[0]), Some(""));
    }

    #[test]
    fn test_valid_node_renders_normally() {
        let mut doc = MarkupDocument::new();
        let marker = Marker { label: "x".into() };
        let id = marker.render(&mut doc).unwrap();

        assert_eq!(doc.tag(id), Some("mark"));
        assert_eq!(doc.get_attr(id, "data-label"), Some("x"));
    }

    #[test]
    fn test_placeholder_keeps_parent_child_count() {
        let mut doc = MarkupDocument::new();
        let parent = doc.create_element("div").unwrap();
        for label in ["a", "", "c"] {
            let child = Marker { label: label.into() }.render(&mut doc).unwrap();
            doc.append_child(parent, child).unwrap();
        }

        let children = doc.children(parent).to_vec();
        assert_eq!(children.len(), 3);
        assert_eq!(doc.tag(children[0]), Some("mark"));
        assert_eq!(doc.text(children[1]), Some(""));
        assert_eq!(doc.tag(children[2]), Some("mark"));
    }

    #[test]
    fn test_leaf_has_no_capabilities() {
        let marker = Marker::default();
        assert!(marker.as_container().is_none());
        assert!(marker.as_text().is_none());
    }
}
