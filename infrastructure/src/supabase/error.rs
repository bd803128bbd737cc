//! Error types for the Supabase adapter

use poliseek_application::AuthError;
use thiserror::Error;

/// Result type alias for Supabase operations
pub type Result<T> = std::result::Result<T, SupabaseError>;

/// Errors that can occur when talking to the Supabase auth API
#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Session store error: {0}")]
    Store(#[from] std::io::Error),
}

impl SupabaseError {
    /// 401/403/404 from the auth API mean the token is no longer valid
    pub fn is_invalid_session(&self) -> bool {
        matches!(self, SupabaseError::Api { status, .. } if matches!(status, 401 | 403 | 404))
    }
}

impl From<SupabaseError> for AuthError {
    fn from(e: SupabaseError) -> Self {
        match e {
            SupabaseError::Http(e) => AuthError::Network(e.to_string()),
            SupabaseError::Api { status, message } => AuthError::Api { status, message },
            SupabaseError::Json(e) => AuthError::InvalidResponse(e.to_string()),
            SupabaseError::Url(e) => AuthError::NotConfigured(e.to_string()),
            SupabaseError::Store(e) => AuthError::Storage(e.to_string()),
        }
    }
}
