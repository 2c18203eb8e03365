//! Error types for ObjectId parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating ObjectIds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectIdError {
    /// The input is not exactly 24 hexadecimal characters.
    #[error("invalid ObjectId: '{input}' (expected 24 hex characters)")]
    InvalidFormat { input: String },
}

impl ObjectIdError {
    pub(crate) fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        match self {
            ObjectIdError::InvalidFormat { input } => input,
        }
    }

    /// Returns true if this error was caused by a length mismatch rather than
    /// a bad character.
    pub fn is_length_error(&self) -> bool {
        self.input().chars().count() != crate::ObjectId::HEX_LEN
    }
}
