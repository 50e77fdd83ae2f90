//! Error types for UUID array decoding.

use thiserror::Error;

/// Errors that can occur when decoding a stored UUID array.
///
/// Encoding never fails, so every variant here originates in the decode path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UuidArrayError {
    /// The raw column value was neither a byte sequence nor text.
    #[error("failed to parse uuid array: unsupported data type {found}")]
    UnsupportedInputType { found: &'static str },

    /// One element of the array literal is not a canonical UUID.
    #[error("invalid UUID in array: {token:?}: {source}")]
    InvalidElement {
        token: String,
        #[source]
        source: uuid::Error,
    },
}

impl UuidArrayError {
    /// Returns true if the raw value had an unsupported representation.
    pub fn is_unsupported_input(&self) -> bool {
        matches!(self, UuidArrayError::UnsupportedInputType { .. })
    }

    /// Returns true if an element failed to parse.
    pub fn is_invalid_element(&self) -> bool {
        matches!(self, UuidArrayError::InvalidElement { .. })
    }

    /// The offending element, after quote and whitespace trimming.
    pub fn token(&self) -> Option<&str> {
        match self {
            UuidArrayError::InvalidElement { token, .. } => Some(token),
            UuidArrayError::UnsupportedInputType { .. } => None,
        }
    }
}
