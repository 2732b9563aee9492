//! Mixed text content
//!
//! A [`TextContainer`] holds an ordered run of [`TextItem`]s: raw strings
//! interleaved with nested nodes (bold spans, links, media...). It flattens
//! to plain text, renders to a fragment, and derives its validity from its
//! items.

use crate::error::ArticleResult;
use crate::sink::{DocumentSink, NodeId};
use crate::validate::is_text_empty;

use super::{Container, Node};

// =============================================================================
// TextItem
// =============================================================================

/// One item of a [`TextContainer`]: a raw text run or an owned child node.
#[derive(Debug)]
pub enum TextItem {
    Text(String),
    Node(Box<dyn Node>),
}

impl TextItem {
    // Generates is_text/as_text and is_node/as_node
    impl_enum_accessors!(Text => str, Node => dyn Node);

    /// Box a node into an item
    pub fn node(node: impl Node + 'static) -> Self {
        Self::Node(Box::new(node))
    }
}

impl From<&str> for TextItem {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for TextItem {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Box<dyn Node>> for TextItem {
    fn from(node: Box<dyn Node>) -> Self {
        Self::Node(node)
    }
}

impl From<TextContainer> for TextItem {
    fn from(container: TextContainer) -> Self {
        Self::Node(Box::new(container))
    }
}

// =============================================================================
// TextContainer
// =============================================================================

/// Ordered, append-only (until cleared) sequence of text runs and nodes.
///
/// A bare `TextContainer` is itself a [`Node`] that renders as a tagless
/// fragment; tagged wrappers such as `Paragraph` render it inside their element.
#[derive(Debug, Default)]
pub struct TextContainer {
    children: Vec<TextItem>,
}

impl TextContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, consuming and returning the container
    pub fn with(mut self, item: impl Into<TextItem>) -> Self {
        self.append(item);
        self
    }

    /// Append an item to the end.
    ///
    /// Nothing is validated here; empty or invalid content only surfaces
    /// through [`TextContainer::is_valid`] and rendering.
    pub fn append(&mut self, item: impl Into<TextItem>) -> &mut Self {
        self.children.push(item.into());
        self
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Items in append order
    pub fn children(&self) -> &[TextItem] {
        &self.children
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if no item has been appended
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Concatenate text runs and nested text, in order.
    ///
    /// Nodes without the text capability contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text(&mut buf);
        buf
    }

    fn collect_text(&self, buf: &mut String) {
        for item in &self.children {
            match item {
                TextItem::Text(text) => buf.push_str(text),
                TextItem::Node(node) => {
                    if let Some(nested) = node.as_text() {
                        nested.collect_text(buf);
                    }
                }
            }
        }
    }

    /// Render the items into a fragment.
    ///
    /// Each text run becomes a text node (even when empty) and each node is
    /// fully rendered. If nothing ended up in the fragment (no items, or only
    /// nodes that rendered to empty fragments), a single empty text node is
    /// added, so the fragment never comes back childless.
    pub fn render_fragment(&self, sink: &mut dyn DocumentSink) -> ArticleResult<NodeId> {
        let fragment = sink.create_fragment()?;
        for item in &self.children {
            let child = match item {
                TextItem::Text(text) => sink.create_text_node(text)?,
                TextItem::Node(node) => node.render(sink)?,
            };
            sink.append_child(fragment, child)?;
        }
        if sink.child_count(fragment)? == 0 {
            let empty = sink.create_text_node("")?;
            sink.append_child(fragment, empty)?;
        }
        trace!(items = self.children.len(), "rendered text fragment");
        Ok(fragment)
    }

    /// Validity derived from the items.
    ///
    /// The first nested node decides: its own validity is returned and no
    /// later item is consulted. Without any nested node, the container is
    /// valid iff its concatenated text is not blank.
    pub fn is_valid(&self) -> bool {
        let mut text = String::new();
        for item in &self.children {
            match item {
                TextItem::Node(node) => return node.is_valid(),
                TextItem::Text(run) => text.push_str(run),
            }
        }
        !is_text_empty(&text)
    }
}

impl Container for TextContainer {
    fn container_children(&self) -> Vec<&dyn Node> {
        self.children.iter().filter_map(TextItem::as_node).collect()
    }
}

impl Node for TextContainer {
    fn node_name(&self) -> &'static str {
        "TextContainer"
    }

    fn is_valid(&self) -> bool {
        TextContainer::is_valid(self)
    }

    fn emit(&self, sink: &mut dyn DocumentSink) -> ArticleResult<NodeId> {
        self.render_fragment(sink)
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn as_text(&self) -> Option<&TextContainer> {
        Some(self)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::MarkupDocument;

    /// Leaf node with a fixed validity
    #[derive(Debug)]
    struct Fixed(bool);

    impl Node for Fixed {
        fn node_name(&self) -> &'static str {
            "Fixed"
        }

        fn is_valid(&self) -> bool {
            self.0
        }

        fn emit(&self, sink: &mut dyn DocumentSink) -> ArticleResult<NodeId> {
            sink.create_element("hr")
        }
    }

    /// Node whose normal structure is an empty fragment
    #[derive(Debug)]
    struct Hollow;

    impl Node for Hollow {
        fn node_name(&self) -> &'static str {
            "Hollow"
        }

        fn is_valid(&self) -> bool {
            true
        }

        fn emit(&self, sink: &mut dyn DocumentSink) -> ArticleResult<NodeId> {
            sink.create_fragment()
        }
    }

    fn container(texts: &[&str]) -> TextContainer {
        let mut c = TextContainer::new();
        for t in texts {
            c.append(*t);
        }
        c
    }

    #[test]
    fn test_append_preserves_order() {
        let mut c = TextContainer::new();
        c.append("a").append(container(&["b"])).append(String::from("c"));

        assert_eq!(c.len(), 3);
        assert_eq!(c.children()[0].as_text(), Some("a"));
        assert!(c.children()[1].is_node());
        assert_eq!(c.children()[2].as_text(), Some("c"));
    }

    #[test]
    fn test_clear() {
        let mut c = container(&["a", "b"]);
        c.clear();
        assert!(c.is_empty());
        assert!(!c.is_valid());
    }

    #[test]
    fn test_plain_text_follows_nesting_order() {
        let c = TextContainer::new()
            .with("x")
            .with(container(&["y"]))
            .with("z");
        assert_eq!(c.plain_text(), "xyz");
    }

    #[test]
    fn test_plain_text_skips_leaf_nodes() {
        let c = TextContainer::new()
            .with("a")
            .with(TextItem::node(Fixed(true)))
            .with("b");
        assert_eq!(c.plain_text(), "ab");
    }

    #[test]
    fn test_validity_from_text() {
        assert!(!container(&[]).is_valid());
        assert!(!container(&["", "  ", "\n"]).is_valid());
        assert!(container(&["  ", "a"]).is_valid());
    }

    #[test]
    fn test_validity_short_circuits_on_first_node() {
        // The leading text alone would make this valid.
        let c = TextContainer::new()
            .with("s1")
            .with("s2")
            .with(container(&["   "]))
            .with("s3");
        assert!(!c.is_valid());

        let c = TextContainer::new()
            .with("")
            .with(container(&["nested"]))
            .with("");
        assert!(c.is_valid());
    }

    #[test]
    fn test_validity_ignores_later_nodes() {
        let c = TextContainer::new()
            .with(TextItem::node(Fixed(true)))
            .with(TextItem::node(Fixed(false)));
        assert!(c.is_valid());

        let c = TextContainer::new()
            .with(TextItem::node(Fixed(false)))
            .with(TextItem::node(Fixed(true)));
        assert!(!c.is_valid());
    }

    #[test]
    fn test_validity_is_recomputed() {
        let mut c = container(&[" "]);
        assert!(!c.is_valid());
        c.append("now valid");
        assert!(c.is_valid());
    }

    #[test]
    fn test_container_children_filters_text() {
        let c = TextContainer::new()
            .with("a")
            .with(container(&["c1"]))
            .with("b")
            .with(TextItem::node(Fixed(true)));

        let nodes = c.container_children();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].node_name(), "TextContainer");
        assert_eq!(nodes[0].as_text().map(TextContainer::plain_text).as_deref(), Some("c1"));
        assert_eq!(nodes[1].node_name(), "Fixed");
    }

    #[test]
    fn test_fragment_of_empty_container_has_one_empty_text() {
        let mut doc = MarkupDocument::new();
        let frag = TextContainer::new().render_fragment(&mut doc).unwrap();

        let children = doc.children(frag);
        assert_eq!(children.len(), 1);
        assert_eq!(doc.text(children[0]), Some(""));
    }

    #[test]
    fn test_fragment_keeps_empty_strings() {
        let mut doc = MarkupDocument::new();
        let frag = container(&[""]).render_fragment(&mut doc).unwrap();
        let children = doc.children(frag);
        assert_eq!(children.len(), 1);
        assert_eq!(doc.text(children[0]), Some(""));

        let frag = container(&["", "a", ""]).render_fragment(&mut doc).unwrap();
        assert_eq!(doc.children(frag).len(), 3);
    }

    #[test]
    fn test_fragment_with_single_node() {
        let mut doc = MarkupDocument::new();
        let c = TextContainer::new().with(TextItem::node(Fixed(true)));
        let frag = c.render_fragment(&mut doc).unwrap();

        let children = doc.children(frag);
        assert_eq!(children.len(), 1);
        assert_eq!(doc.tag(children[0]), Some("hr"));
    }

    #[test]
    fn test_fragment_of_hollow_nodes_is_not_childless() {
        let mut doc = MarkupDocument::new();
        let c = TextContainer::new()
            .with(TextItem::node(Hollow))
            .with(TextItem::node(Hollow));
        let frag = c.render_fragment(&mut doc).unwrap();

        let children = doc.children(frag);
        assert_eq!(children.len(), 1);
        assert_eq!(doc.text(children[0]), Some(""));
    }

    #[test]
    fn test_fragment_with_hollow_node_and_text_adds_nothing() {
        let mut doc = MarkupDocument::new();
        let c = TextContainer::new().with(TextItem::node(Hollow)).with("a");
        let frag = c.render_fragment(&mut doc).unwrap();
        assert_eq!(doc.children(frag).len(), 1);
        assert_eq!(doc.text_content(frag), "a");
    }

    #[test]
    fn test_fragment_renders_invalid_nodes_as_placeholders() {
        let mut doc = MarkupDocument::new();
        let c = TextContainer::new()
            .with("before")
            .with(TextItem::node(Fixed(false)))
            .with("after");
        let frag = c.render_fragment(&mut doc).unwrap();

        let texts: Vec<_> = doc
            .children(frag)
            .iter()
            .map(|&id| doc.text(id))
            .collect();
        assert_eq!(texts, [Some("before"), Some(""), Some("after")]);
    }

    #[test]
    fn test_nested_container_flattens_into_fragment() {
        let mut doc = MarkupDocument::new();
        let c = TextContainer::new()
            .with("x")
            .with(container(&["y1", "y2"]))
            .with("z");
        let frag = c.render_fragment(&mut doc).unwrap();

        assert_eq!(doc.children(frag).len(), 4);
        assert_eq!(doc.text_content(frag), "xy1y2z");
    }

    #[test]
    fn test_capabilities() {
        let c = container(&["a"]);
        assert!(c.as_container().is_some());
        assert!(std::ptr::eq(c.as_text().unwrap(), &c));
    }
}
