//! # Source Buffer Contract
//!
//! The controller never touches the live editing surface. It asks a
//! [`TextBuffer`] for a [`SourceText`] snapshot at run time and works on that.

use std::fmt;

use thiserror::Error;

/// An immutable copy of the buffer contents, taken when a run is triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText(String);

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle violations of a text buffer host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// `read_all` was called before the surface was attached.
    #[error("text buffer was read before it was initialized")]
    Uninitialized,
    /// `initialize` was called a second time; the existing edits are kept.
    #[error("text buffer is already initialized")]
    AlreadyInitialized,
}

/// Read side of the editable text surface.
pub trait TextBuffer {
    /// Full current contents with lines joined by `\n`, regardless of cursor
    /// or selection. Must not mutate the buffer.
    fn read_all(&self) -> Result<SourceText, BufferError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_text_preserves_content_verbatim() {
        let text = SourceText::from("  let a = 1;\n\n");
        assert_eq!(text.as_str(), "  let a = 1;\n\n");
        assert_eq!(text.to_string(), "  let a = 1;\n\n");
    }

    #[test]
    fn test_empty_source_text() {
        assert!(SourceText::default().is_empty());
        assert!(!SourceText::new("x").is_empty());
    }

    #[test]
    fn test_buffer_error_messages() {
        assert_eq!(
            BufferError::Uninitialized.to_string(),
            "text buffer was read before it was initialized"
        );
        assert_eq!(
            BufferError::AlreadyInitialized.to_string(),
            "text buffer is already initialized"
        );
    }
}
