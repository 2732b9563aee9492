//! tola-article - Rich-article content tree with fail-soft markup rendering
//!
//! ## Core Concepts
//!
//! **Mixed content**: a [`TextContainer`] holds raw text runs interleaved with
//! nested nodes, as a closed [`TextItem`] enum.
//!
//! **Validity**: every [`Node`] reports whether it holds enough data to be
//! meaningful. Containers derive it from their items, leaves from their
//! required fields.
//!
//! **Fail soft, never omit**: rendering an invalid node emits a neutral
//! placeholder, so the output tree keeps one slot per node that was added.
//!
//! ## Modules
//! - `node`: `Node` contract, `Container` capability, `TextContainer`
//! - `families`: concrete nodes (`Audio`, `Paragraph`, `Bold`, ...)
//! - `sink`: `DocumentSink` trait and `NodeId` handles
//! - `markup`: `MarkupDocument`, the in-memory sink
//! - `render`: HTML serialization
//!
//! ## Usage
//!
//! ```
//! use tola_article::prelude::*;
//!
//! let paragraph = Paragraph::new()
//!     .with("Listen to ")
//!     .with(Bold::new().with("this"))
//!     .with(Audio::create().with_url("http://x/a.mp3").enable_autoplay());
//!
//! let html = render_to_string(&paragraph, &RenderConfig::XHTML).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<p>Listen to <b>this</b><audio autoplay="autoplay"><source src="http://x/a.mp3" /></audio></p>"#
//! );
//! ```

#[macro_use]
mod macros;

/// Content node contract and mixed text content
pub mod node;

/// Built-in node types
pub mod families;

/// Markup sink abstraction
pub mod sink;

/// In-memory markup tree
pub mod markup;

/// HTML serialization
pub mod render;

/// Attribute storage
pub mod attr;

/// Text validation helpers
pub mod validate;

/// Deterministic hashing
pub mod hash;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node contract
pub use node::{Container, Node, TextContainer, TextItem};

// Built-in nodes
pub use families::{Anchor, Audio, Bold, H1, H2, Italic, Paragraph};

// Sink
pub use markup::{MarkupDocument, MarkupKind};
pub use sink::{DocumentSink, NodeId};

// Render
pub use render::{render_to_string, to_html, RenderConfig};

// Attributes
pub use attr::{Attrs, AttrsExt};

// Validation
pub use validate::is_text_empty;

// Hashing
pub use hash::StableHasher;

// Error types
pub use error::{ArticleError, ArticleResult};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn article_body() -> Vec<Box<dyn Node>> {
        vec![
            Box::new(H1::new().with("Episode 12")),
            Box::new(Paragraph::new().with("Show notes below.")),
            Box::new(Audio::create().with_title("Episode 12")),
            Box::new(
                Paragraph::new()
                    .with("Hosted by ")
                    .with(Anchor::new().with_href("/hosts/ada").with("Ada")),
            ),
        ]
    }

    #[test]
    fn test_article_keeps_one_slot_per_node() {
        let mut doc = MarkupDocument::new();
        let body = doc.create_element("article").unwrap();
        for node in article_body() {
            let rendered = node.render(&mut doc).unwrap();
            doc.append_child(body, rendered).unwrap();
        }

        let children = doc.children(body).to_vec();
        assert_eq!(children.len(), 4);
        assert_eq!(doc.tag(children[0]), Some("h1"));
        assert_eq!(doc.tag(children[1]), Some("p"));
        // Audio without a URL
        assert_eq!(doc.text(children[2]), Some(""));
        assert_eq!(doc.tag(children[3]), Some("p"));

        assert_eq!(
            to_html(&doc, body, &RenderConfig::HTML).unwrap(),
            r#"<article><h1>Episode 12</h1><p>Show notes below.</p><p>Hosted by <a href="/hosts/ada">Ada</a></p></article>"#
        );
    }

    #[test]
    fn test_rendering_twice_is_structurally_identical() {
        let paragraph = Paragraph::new()
            .with("a")
            .with(Italic::new().with("b"))
            .with(Audio::create().with_url("c.mp3").enable_muted());

        let mut doc = MarkupDocument::new();
        let first = paragraph.render(&mut doc).unwrap();
        let second = paragraph.render(&mut doc).unwrap();
        assert_ne!(first, second);
        assert_eq!(doc.fingerprint(first).unwrap(), doc.fingerprint(second).unwrap());
        assert_eq!(
            to_html(&doc, first, &RenderConfig::default()).unwrap(),
            to_html(&doc, second, &RenderConfig::default()).unwrap()
        );
    }

    #[test]
    fn test_validity_tracks_mutation() {
        let mut paragraph = Paragraph::new();
        assert!(!paragraph.is_valid());
        paragraph.append("text");
        assert!(paragraph.is_valid());
        // First nested node decides, even after valid text.
        paragraph.append(Bold::new());
        assert!(!paragraph.is_valid());
        paragraph.clear();
        paragraph.append(Bold::new().with("bold"));
        paragraph.append(Italic::new());
        assert!(paragraph.is_valid());
    }
}
