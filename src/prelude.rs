//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_article::prelude::*;
//! ```

// Node contract
pub use crate::node::{Container, Node, TextContainer, TextItem};

// Concrete nodes
pub use crate::families::{Anchor, Audio, Bold, H1, H2, Italic, Paragraph};

// Sink
pub use crate::markup::{MarkupDocument, MarkupKind};
pub use crate::sink::{DocumentSink, NodeId};

// Render
pub use crate::render::{render_to_string, to_html, RenderConfig};

// Error
pub use crate::error::{ArticleError, ArticleResult};
