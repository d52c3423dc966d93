//! Text buffer implementation (Layer 0)
//!
//! The buffer is immutable per revision: an edit replaces it wholesale.
//! All offsets are UTF-16 code units so that ranges coming from the
//! browser selection API can be used without conversion.

use super::range::TextRange;
use serde::{Deserialize, Serialize};

/// Script text plus its cached UTF-16 length
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TextBuffer {
    text: String,
    utf16_len: usize,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer from a string
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let utf16_len = text.encode_utf16().count();
        Self { text, utf16_len }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in UTF-16 code units
    pub fn len(&self) -> usize {
        self.utf16_len
    }

    pub fn is_empty(&self) -> bool {
        self.utf16_len == 0
    }

    /// Substring covered by `range`, or `None` if the range reaches past the end.
    ///
    /// A boundary that splits a surrogate pair yields U+FFFD for the
    /// orphaned half, the same thing a JS `substring` does when rendered.
    pub fn slice(&self, range: TextRange) -> Option<String> {
        if range.exceeds(self.utf16_len) || range.start > range.end {
            return None;
        }

        // ASCII-only text: byte offsets equal UTF-16 offsets
        if self.text.len() == self.utf16_len {
            return Some(self.text[range.start..range.end].to_string());
        }

        let units: Vec<u16> = self
            .text
            .encode_utf16()
            .skip(range.start)
            .take(range.len())
            .collect();
        Some(String::from_utf16_lossy(&units))
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<TextBuffer> for String {
    fn from(buffer: TextBuffer) -> Self {
        buffer.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::from_text("The cat sat on the mat");
        assert_eq!(buffer.len(), 22);
        assert_eq!(buffer.as_str(), "The cat sat on the mat");
        assert!(TextBuffer::new().is_empty());
    }

    #[test]
    fn test_slice_ascii() {
        let buffer = TextBuffer::from_text("The cat sat on the mat");
        assert_eq!(buffer.slice(TextRange::new(4, 7)).as_deref(), Some("cat"));
        assert_eq!(buffer.slice(TextRange::new(8, 11)).as_deref(), Some("sat"));
        assert_eq!(buffer.slice(TextRange::new(20, 23)), None);
    }

    #[test]
    fn test_utf16_offsets() {
        // "é" is one code unit, "🎬" is a surrogate pair (two code units)
        let buffer = TextBuffer::from_text("café 🎬 take");
        assert_eq!(buffer.len(), 12);
        assert_eq!(buffer.slice(TextRange::new(0, 4)).as_deref(), Some("café"));
        assert_eq!(buffer.slice(TextRange::new(5, 7)).as_deref(), Some("🎬"));
        assert_eq!(buffer.slice(TextRange::new(8, 12)).as_deref(), Some("take"));
    }

    #[test]
    fn test_slice_splitting_surrogate_pair() {
        let buffer = TextBuffer::from_text("🎬x");
        assert_eq!(buffer.slice(TextRange::new(1, 3)).as_deref(), Some("\u{FFFD}x"));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let buffer = TextBuffer::from_text("short");
        let json = serde_json::to_string(&buffer).unwrap();
        assert_eq!(json, "\"short\"");

        let back: TextBuffer = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 5);
    }
}
