//! Internal macros: diagnostics, enum accessors, and text element generation
//!
//! All accessor macros use `paste` internally for identifier concatenation.

// =============================================================================
// Diagnostics
// =============================================================================

// Forward to `tracing` when the `tracing` feature is on or under test;
// compile to nothing otherwise.

#[cfg(any(test, feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(any(test, feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

// =============================================================================
// Enum accessor generation
// =============================================================================

/// Generate `is_xxx` and `as_xxx` methods for single-field enum variants
///
/// # Generated methods per variant
/// - `is_xxx(&self) -> bool` - variant check
/// - `as_xxx(&self) -> Option<&Target>` - borrow through one deref
///
/// # Example
/// ```ignore
/// impl_enum_accessors!(Text => str, Node => dyn Node);
/// ```
macro_rules! impl_enum_accessors {
    ($($variant:ident => $target:ty),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a `" $variant "` item"]
                #[inline]
                pub fn [<is_ $variant:lower>](&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                #[doc = "Borrow the `" $variant "` payload"]
                #[inline]
                pub fn [<as_ $variant:lower>](&self) -> Option<&$target> {
                    match self {
                        Self::$variant(v) => Some(&**v),
                        _ => None,
                    }
                }
            )*
        }
    };
}

// =============================================================================
// Text element generation
// =============================================================================

/// Define a tag-wrapping node backed by a [`TextContainer`](crate::node::TextContainer)
///
/// The generated type delegates append/clear/validity to its container and
/// renders as `<tag>` holding the container's fragment.
///
/// # Example
/// ```ignore
/// text_element! {
///     /// Paragraph `<p>`
///     Paragraph => "p"
/// }
/// ```
macro_rules! text_element {
    ($(#[$meta:meta])* $name:ident => $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            text: $crate::node::TextContainer,
        }

        impl $name {
            /// Tag name this element renders as
            pub const TAG: &'static str = $tag;

            /// Create an empty element
            pub fn new() -> Self {
                Self::default()
            }

            /// Append an item, consuming and returning the element
            pub fn with(mut self, item: impl Into<$crate::node::TextItem>) -> Self {
                self.text.append(item);
                self
            }

            /// Append an item
            pub fn append(&mut self, item: impl Into<$crate::node::TextItem>) -> &mut Self {
                self.text.append(item);
                self
            }

            /// Remove every item
            pub fn clear(&mut self) {
                self.text.clear();
            }

            /// Items in append order
            pub fn children(&self) -> &[$crate::node::TextItem] {
                self.text.children()
            }

            /// Flattened plain text
            pub fn plain_text(&self) -> String {
                self.text.plain_text()
            }

            /// The backing text container
            pub fn text_container(&self) -> &$crate::node::TextContainer {
                &self.text
            }
        }

        impl $crate::node::Node for $name {
            fn node_name(&self) -> &'static str {
                stringify!($name)
            }

            fn is_valid(&self) -> bool {
                self.text.is_valid()
            }

            fn emit(
                &self,
                sink: &mut dyn $crate::sink::DocumentSink,
            ) -> $crate::error::ArticleResult<$crate::sink::NodeId> {
                $crate::node::emit_text_element(Self::TAG, &self.text, sink)
            }

            fn as_container(&self) -> Option<&dyn $crate::node::Container> {
                Some(&self.text)
            }

            fn as_text(&self) -> Option<&$crate::node::TextContainer> {
                Some(&self.text)
            }
        }

        impl From<$name> for $crate::node::TextItem {
            fn from(node: $name) -> Self {
                $crate::node::TextItem::Node(Box::new(node))
            }
        }
    };
}
