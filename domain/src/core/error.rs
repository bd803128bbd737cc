//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown sender: {0} (expected \"user\" or \"bot\")")]
    UnknownSender(String),

    #[error("Invalid timestamp {value}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Malformed OAuth callback: {0}")]
    MalformedCallback(String),

    #[error("OAuth provider returned an error: {error}")]
    ProviderRejected {
        error: String,
        description: Option<String>,
    },

    #[error("Record {index} is not a chat type: {reason}")]
    UnrecognizedRecord { index: usize, reason: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl DomainError {
    /// Check if this error originates from the identity provider rather than local parsing
    pub fn is_provider_rejection(&self) -> bool {
        matches!(self, DomainError::ProviderRejected { .. })
    }
}
