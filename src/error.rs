//! Error types for tola-article.
//!
//! Incomplete content is never an error (it renders as a placeholder);
//! only misuse of a [`DocumentSink`](crate::sink::DocumentSink) fails.

use thiserror::Error;

use crate::sink::NodeId;

/// Errors reported by a document sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleError {
    /// Handle does not belong to this document
    #[error("unknown node handle {0}")]
    UnknownNode(NodeId),

    /// Children can only be appended to elements and fragments
    #[error("node {0} cannot hold children")]
    NotAContainer(NodeId),

    /// Attributes can only be set on elements
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// Child is already attached to another parent
    #[error("node {0} already has a parent")]
    AlreadyAttached(NodeId),

    /// Appending would make a node its own ancestor
    #[error("appending {child} under {parent} would create a cycle")]
    CycleDetected {
        /// Intended parent
        parent: NodeId,
        /// Intended child
        child: NodeId,
    },

    /// Every handle value is in use
    #[error("document is full: at most {max} nodes")]
    CapacityExceeded {
        /// Maximum number of nodes per document
        max: u64,
    },

    /// Attribute names must be non-empty
    #[error("attribute name must not be empty")]
    EmptyAttributeName,
}

/// Result type alias for article operations.
pub type ArticleResult<T> = Result<T, ArticleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArticleError::UnknownNode(NodeId::from_raw(7));
        assert_eq!(err.to_string(), "unknown node handle #7");

        let err = ArticleError::CycleDetected {
            parent: NodeId::from_raw(2),
            child: NodeId::from_raw(1),
        };
        assert_eq!(err.to_string(), "appending #1 under #2 would create a cycle");

        assert_eq!(
            ArticleError::EmptyAttributeName.to_string(),
            "attribute name must not be empty"
        );

        let err = ArticleError::CapacityExceeded { max: crate::markup::MAX_NODES };
        assert_eq!(err.to_string(), "document is full: at most 4294967296 nodes");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArticleError>();
    }
}
