//! Attribute storage for markup elements
//!
//! Attributes are an ordered list of name/value pairs. Names are unique:
//! setting an existing name overwrites its value in place, so the first
//! write fixes the serialization position and the last write fixes the value.

use compact_str::CompactString;
use smallvec::SmallVec;

/// Element attributes as ordered key-value pairs
///
/// Article elements rarely carry more than a handful of attributes,
/// so the first four live inline.
pub type Attrs = SmallVec<[(CompactString, String); 4]>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or overwrite in place)
    fn set_attr(&mut self, name: &str, value: impl Into<String>);
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k.as_str() == name)
    }

    fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.iter_mut().find(|(k, _)| k.as_str() == name) {
            Some(attr) => attr.1 = value,
            None => self.push((CompactString::new(name), value)),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
