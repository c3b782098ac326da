//! Rules for the text buffer handed to the QR encoder.

/// Fallback payload used when the input trims down to nothing.
pub const DEFAULT_CONTENT: &str = "https://abhijayrajvansh.com";

/// Returns the value the QR encoder actually receives.
///
/// The raw input is trimmed; an input that trims to empty falls back to
/// [`DEFAULT_CONTENT`] so there is always something to encode.
pub fn encoded_value(input: &str) -> &str {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_CONTENT
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_value_trims_whitespace() {
        assert_eq!(encoded_value("  hello world  "), "hello world");
        assert_eq!(encoded_value("\thello\n"), "hello");
    }

    #[test]
    fn test_encoded_value_passes_through_plain_text() {
        assert_eq!(encoded_value("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_empty_input_falls_back_to_default() {
        assert_eq!(encoded_value(""), DEFAULT_CONTENT);
    }

    #[test]
    fn test_whitespace_only_input_falls_back_to_default() {
        assert_eq!(encoded_value("  "), DEFAULT_CONTENT);
        assert_eq!(encoded_value("\n\t "), DEFAULT_CONTENT);
    }

    #[test]
    fn test_interior_whitespace_is_preserved() {
        assert_eq!(encoded_value(" a  b "), "a  b");
    }
}
