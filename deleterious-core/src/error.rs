//! Unified error type definition

use std::borrow::Cow;

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// No identifiers were supplied
    #[error("No identifiers provided")]
    EmptyRequest,

    /// None of the supplied identifiers exist in the store
    #[error("None of the provided identifiers exist")]
    NoMatches,

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, records do not exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::EmptyRequest | Self::NoMatches | Self::ValidationError(_) => true,
            Self::StorageError(_) => false,
        }
    }

    /// The failure text without the variant prefix, as shown to clients.
    #[must_use]
    pub fn detail(&self) -> Cow<'_, str> {
        match self {
            Self::StorageError(msg) | Self::ValidationError(msg) => Cow::Borrowed(msg),
            Self::EmptyRequest | Self::NoMatches => Cow::Owned(self.to_string()),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
