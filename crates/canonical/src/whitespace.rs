//! Whitespace normalization utilities.
//!
//! Whitespace is Unicode whitespace (`char::is_whitespace`): ASCII space,
//! tab, newline, carriage return, non-breaking space and the rest.
//!
//! # Examples
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! let normalized = collapse_whitespace("  int   main ( )\r\n{  ");
//! assert_eq!(normalized, "int main ( ) {");
//! ```

/// Collapses runs of whitespace into single ASCII spaces and trims both ends.
///
/// The tokenizer already treats whitespace as a delimiter, so this is mostly
/// useful for rendering normalized source back to a reader.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("hello\t\t\tworld"), "hello world");
/// assert_eq!(collapse_whitespace("hello\u{00A0}world"), "hello world");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_line_endings() {
        assert_eq!(collapse_whitespace("a\r\n\r\nb"), "a b");
    }

    #[test]
    fn already_normalized_is_unchanged() {
        assert_eq!(collapse_whitespace("a b c"), "a b c");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(collapse_whitespace(""), "");
    }
}
