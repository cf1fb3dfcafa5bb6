//! Validation rule for the message field.

/// Minimum number of characters a message must have to be sent.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Error shown next to the field when the message is too short.
pub const MESSAGE_TOO_SHORT: &str = "O mínimo de caracteres na pergunta é de 10 para ser enviada.";

/// A message field rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Fewer characters than the schema minimum.
    #[error("{message}")]
    TooShort {
        /// UTF-16 code units actually entered.
        len: usize,
        /// Required minimum.
        min: usize,
        /// Localized text for the inline error.
        message: &'static str,
    },
}

/// Schema for the single `message` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSchema {
    min_chars: usize,
    too_short: &'static str,
}

impl MessageSchema {
    pub const fn new(min_chars: usize, too_short: &'static str) -> Self {
        Self {
            min_chars,
            too_short,
        }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Check a candidate message, untrimmed.
    ///
    /// Length is counted in UTF-16 code units, so a character outside the
    /// Basic Multilingual Plane counts twice.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let len = value.encode_utf16().count();
        if len < self.min_chars {
            return Err(ValidationError::TooShort {
                len,
                min: self.min_chars,
                message: self.too_short,
            });
        }
        Ok(())
    }
}

impl Default for MessageSchema {
    fn default() -> Self {
        Self::new(MIN_MESSAGE_CHARS, MESSAGE_TOO_SHORT)
    }
}
