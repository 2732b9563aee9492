//! In-memory markup tree
//!
//! [`MarkupDocument`] is an arena of elements, text nodes, and fragments
//! that implements [`DocumentSink`]. Rendered trees are read back through
//! its query API or serialized with [`crate::render::to_html`].

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};
use crate::error::{ArticleError, ArticleResult};
use crate::hash::StableHasher;
use crate::sink::{DocumentSink, NodeId};

// =============================================================================
// MarkupKind
// =============================================================================

/// What a markup node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupKind {
    /// Named element with attributes
    Element {
        /// Tag name
        tag: CompactString,
        /// Attributes in first-set order
        attrs: Attrs,
    },
    /// Text run (stored unescaped)
    Text(String),
    /// Tagless grouping of siblings
    Fragment,
}

impl MarkupKind {
    fn can_hold_children(&self) -> bool {
        !matches!(self, MarkupKind::Text(_))
    }
}

#[derive(Debug, Clone)]
struct Slot {
    kind: MarkupKind,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

impl Slot {
    fn new(kind: MarkupKind) -> Self {
        Self {
            kind,
            parent: None,
            children: SmallVec::new(),
        }
    }
}

// =============================================================================
// MarkupDocument
// =============================================================================

/// Arena-backed markup tree.
///
/// Nodes are never freed; a fragment emptied by `append_child` stays in the
/// arena as a childless, detached node.
#[derive(Debug, Clone, Default)]
pub struct MarkupDocument {
    slots: Vec<Slot>,
}

/// Upper bound on nodes per document, set by the `u32` handle space.
pub const MAX_NODES: u64 = u32::MAX as u64 + 1;

fn handle_for(index: usize) -> ArticleResult<NodeId> {
    u32::try_from(index)
        .map(NodeId)
        .map_err(|_| ArticleError::CapacityExceeded { max: MAX_NODES })
}

impl MarkupDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created in this document
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no node has been created yet
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, id: NodeId) -> ArticleResult<&Slot> {
        self.slots.get(id.index()).ok_or(ArticleError::UnknownNode(id))
    }

    fn slot_mut(&mut self, id: NodeId) -> ArticleResult<&mut Slot> {
        self.slots.get_mut(id.index()).ok_or(ArticleError::UnknownNode(id))
    }

    fn push(&mut self, kind: MarkupKind) -> ArticleResult<NodeId> {
        let id = handle_for(self.slots.len())?;
        self.slots.push(Slot::new(kind));
        Ok(id)
    }

    /// True if `ancestor` is `node` or one of its ancestors
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.slots.get(id.index()).and_then(|s| s.parent);
        }
        false
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read-back API
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the kind of a node
    pub fn kind(&self, id: NodeId) -> Option<&MarkupKind> {
        self.slots.get(id.index()).map(|s| &s.kind)
    }

    /// Check if the node is an element
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(MarkupKind::Element { .. }))
    }

    /// Check if the node is a text node
    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(MarkupKind::Text(_)))
    }

    /// Check if the node is a fragment
    pub fn is_fragment(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(MarkupKind::Fragment))
    }

    /// Tag name of an element
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            MarkupKind::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Attributes of an element
    pub fn attrs(&self, id: NodeId) -> Option<&Attrs> {
        match self.kind(id)? {
            MarkupKind::Element { attrs, .. } => Some(attrs),
            _ => None,
        }
    }

    /// Single attribute value of an element
    pub fn get_attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attrs(id)?.get_attr(name)
    }

    /// Check if an element carries the attribute
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attrs(id).is_some_and(|attrs| attrs.has_attr(name))
    }

    /// Content of a text node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            MarkupKind::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Children in insertion order (empty for unknown handles)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.index())
            .map(|s| s.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.index()).and_then(|s| s.parent)
    }

    /// Concatenated text of every text node below `id`, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut buf = String::new();
        self.collect_text(id, &mut buf);
        buf
    }

    fn collect_text(&self, id: NodeId, buf: &mut String) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            match self.kind(current) {
                Some(MarkupKind::Text(text)) => buf.push_str(text),
                Some(_) => stack.extend(self.children(current).iter().rev().copied()),
                None => {}
            }
        }
    }

    /// Structural hash of the subtree rooted at `id`.
    ///
    /// Two subtrees with equal kinds, tags, attributes (in order), text, and
    /// child structure hash equal regardless of their handles.
    pub fn fingerprint(&self, id: NodeId) -> ArticleResult<u64> {
        // Post-order walk: a node is hashed once all of its children are.
        let mut stack = vec![(id, false)];
        let mut hashes: Vec<u64> = Vec::new();
        while let Some((current, children_done)) = stack.pop() {
            let slot = self.slot(current)?;
            if !children_done {
                stack.push((current, true));
                stack.extend(slot.children.iter().rev().map(|&child| (child, false)));
                continue;
            }
            let child_hashes = hashes.split_off(hashes.len() - slot.children.len());
            hashes.push(Self::hash_slot(slot, &child_hashes));
        }
        hashes.pop().ok_or(ArticleError::UnknownNode(id))
    }

    fn hash_slot(slot: &Slot, child_hashes: &[u64]) -> u64 {
        let mut hasher = match &slot.kind {
            MarkupKind::Element { tag, attrs } => {
                let mut h = StableHasher::new()
                    .update_tag(b'E')
                    .update_str(tag)
                    .update_u64(attrs.len() as u64);
                for (name, value) in attrs {
                    h = h.update_str(name).update_str(value);
                }
                h
            }
            MarkupKind::Text(text) => StableHasher::new().update_tag(b'T').update_str(text),
            MarkupKind::Fragment => StableHasher::new().update_tag(b'F'),
        };
        hasher = hasher.update_u64(child_hashes.len() as u64);
        for &child in child_hashes {
            hasher = hasher.update_u64(child);
        }
        hasher.finish()
    }
}

impl DocumentSink for MarkupDocument {
    fn create_element(&mut self, tag: &str) -> ArticleResult<NodeId> {
        self.push(MarkupKind::Element {
            tag: CompactString::new(tag),
            attrs: Attrs::new(),
        })
    }

    fn create_text_node(&mut self, text: &str) -> ArticleResult<NodeId> {
        self.push(MarkupKind::Text(text.to_owned()))
    }

    fn create_fragment(&mut self) -> ArticleResult<NodeId> {
        self.push(MarkupKind::Fragment)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> ArticleResult<()> {
        if !self.slot(parent)?.kind.can_hold_children() {
            return Err(ArticleError::NotAContainer(parent));
        }
        let child_slot = self.slot(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(ArticleError::CycleDetected { parent, child });
        }

        if matches!(child_slot.kind, MarkupKind::Fragment) {
            // Fragments dissolve into the parent.
            let moved = std::mem::take(&mut self.slot_mut(child)?.children);
            for &grandchild in &moved {
                self.slot_mut(grandchild)?.parent = Some(parent);
            }
            self.slot_mut(parent)?.children.extend(moved);
            return Ok(());
        }

        if child_slot.parent.is_some() {
            return Err(ArticleError::AlreadyAttached(child));
        }
        self.slot_mut(child)?.parent = Some(parent);
        self.slot_mut(parent)?.children.push(child);
        Ok(())
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> ArticleResult<()> {
        if name.is_empty() {
            return Err(ArticleError::EmptyAttributeName);
        }
        match &mut self.slot_mut(element)?.kind {
            MarkupKind::Element { attrs, .. } => {
                attrs.set_attr(name, value);
                Ok(())
            }
            _ => Err(ArticleError::NotAnElement(element)),
        }
    }

    fn child_count(&self, id: NodeId) -> ArticleResult<usize> {
        Ok(self.slot(id)?.children.len())
    }
}

// =============================================================================
// Tests
// =============================================================================
