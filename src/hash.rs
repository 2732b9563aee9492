//! Deterministic hashing for rendered markup
//!
//! Fingerprints compare two rendered subtrees structurally, independent of
//! the handles the sink assigned to them.

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// A deterministic hasher using blake3
///
/// Unlike `std::hash::Hasher`, the output is identical across process runs.
/// Strings are length-prefixed so adjacent fields cannot run together.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create a new StableHasher
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with a single tag byte
    #[inline]
    pub fn update_tag(mut self, tag: u8) -> Self {
        self.inner.update(&[tag]);
        self
    }

    /// Update with a length-prefixed string
    #[inline]
    pub fn update_str(mut self, s: &str) -> Self {
        self.inner.update(&(s.len() as u64).to_le_bytes());
        self.inner.update(s.as_bytes());
        self
    }

    /// Update with a u64 value (little-endian)
    #[inline]
    pub fn update_u64(mut self, v: u64) -> Self {
        self.inner.update(&v.to_le_bytes());
        self
    }

    /// Finish and return the first 8 bytes of the digest as a little-endian u64
    #[inline]
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}
