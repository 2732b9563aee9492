//! Text validation helpers shared by node validity rules.

/// Check whether a text value is semantically empty.
///
/// Empty strings and whitespace-only strings are empty.
#[inline]
pub fn is_text_empty(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_text_empty() {
        assert!(is_text_empty(""));
        assert!(is_text_empty("   "));
        assert!(is_text_empty("\n\t \r\n"));
        assert!(!is_text_empty("a"));
        assert!(!is_text_empty("  http://x/a.mp3  "));
    }
}
