//! Markup sink abstraction
//!
//! Nodes never build markup directly. They write into a [`DocumentSink`],
//! a minimal mutable tree API with elements, text nodes, and fragments.
//! [`MarkupDocument`](crate::markup::MarkupDocument) is the in-memory
//! implementation shipped with this crate.

use std::fmt;

use crate::error::ArticleResult;

// =============================================================================
// NodeId
// =============================================================================

/// Handle to a node created by a [`DocumentSink`].
///
/// Handles are only meaningful for the sink that issued them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Create a handle from its raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn as_raw(&self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// DocumentSink
// =============================================================================

/// A mutable markup tree that nodes render into.
///
/// Semantics every implementation must follow:
/// - attribute names are unique per element, and the last write wins
/// - children keep insertion order
/// - appending a fragment moves its children into the parent in order and
///   leaves the fragment empty
/// - `create_*` fail only when the sink has run out of handles
///
/// The trait is object safe so that `Node::render` can take `&mut dyn DocumentSink`.
pub trait DocumentSink {
    /// Create a detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> ArticleResult<NodeId>;

    /// Create a detached text node.
    fn create_text_node(&mut self, text: &str) -> ArticleResult<NodeId>;

    /// Create a detached, childless fragment.
    fn create_fragment(&mut self) -> ArticleResult<NodeId>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> ArticleResult<()>;

    /// Set an attribute on an element, replacing any previous value.
    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> ArticleResult<()>;

    /// Number of children currently attached to `id`.
    fn child_count(&self, id: NodeId) -> ArticleResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_obj_safe!(DocumentSink);
    static_assertions::assert_eq_size!(NodeId, u32);

    #[test]
    fn test_node_id_raw_roundtrip() {
        let id = NodeId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
        assert_eq!(id.index(), 42);
        assert_eq!(id.to_string(), "#42");
        assert_eq!(format!("{id:?}"), "NodeId(42)");
    }
}
