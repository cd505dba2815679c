//! Validated private message text.

use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum private message text, in UTF-8 bytes.
///
/// A message body is capped at 32 KiB; 1 KiB is reserved for framing.
pub const MAX_PRIVATE_MESSAGE_TEXT_LENGTH: usize = 32 * 1024 - 1024;

/// Non-empty message text that fits in a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    /// Validates and wraps text.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is empty
    /// - `TooLong` if the text exceeds `MAX_PRIVATE_MESSAGE_TEXT_LENGTH` bytes
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        if text.len() > MAX_PRIVATE_MESSAGE_TEXT_LENGTH {
            return Err(ValidationError::too_long(
                "text",
                MAX_PRIVATE_MESSAGE_TEXT_LENGTH,
                text.len(),
            ));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
