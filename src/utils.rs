//! Utility functions for string normalization and log formatting.

/// Collapse every run of whitespace to a single space and trim the ends.
///
/// Extracted HTML text arrives riddled with newlines, tabs, and indentation
/// runs; storage and analysis both expect a flat single-spaced body.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis appended.
/// Truncation happens on a character boundary, so multi-byte titles are safe.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of characters to keep
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max).collect();
        format!("{kept}…")
    }
}
