//! Identity provider port
//!
//! The backend-as-a-service that owns sessions: it resolves the current
//! session, turns an OAuth callback into a session, starts the OAuth
//! authorization, and revokes sessions.

use async_trait::async_trait;
use poliseek_domain::{AuthSession, DomainError, OAuthSignInRequest};
use thiserror::Error;
use url::Url;

/// Errors reported by the identity provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Auth API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid OAuth callback: {0}")]
    Callback(String),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Identity provider not configured: {0}")]
    NotConfigured(String),
}

impl AuthError {
    /// Whether retrying the same operation later might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            AuthError::Network(_) => true,
            AuthError::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<DomainError> for AuthError {
    fn from(e: DomainError) -> Self {
        AuthError::Callback(e.to_string())
    }
}

/// Port for the identity/session provider
///
/// Implementations live in the infrastructure layer (e.g. the Supabase
/// auth client).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetch the current session, if any.
    async fn get_session(&self) -> Result<Option<AuthSession>, AuthError>;

    /// Resolve the session carried by an OAuth redirect fragment.
    ///
    /// # Default
    ///
    /// Providers that detect the session from the URL on their own simply
    /// return the current session.
    async fn session_from_callback(
        &self,
        _fragment: &str,
    ) -> Result<Option<AuthSession>, AuthError> {
        self.get_session().await
    }

    /// Start an OAuth authorization; returns the URL to redirect the browser to.
    async fn sign_in_with_oauth(&self, request: &OAuthSignInRequest) -> Result<Url, AuthError>;

    /// Revoke the current session. Signing out without a session succeeds.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(AuthError::Network("reset".to_string()).is_transient());
        assert!(
            AuthError::Api {
                status: 503,
                message: "unavailable".to_string()
            }
            .is_transient()
        );
        assert!(
            !AuthError::Api {
                status: 401,
                message: "bad jwt".to_string()
            }
            .is_transient()
        );
        assert!(!AuthError::Callback("x".to_string()).is_transient());
    }

    #[test]
    fn test_from_domain_error() {
        let err: AuthError = DomainError::MalformedCallback("empty fragment".to_string()).into();
        assert_eq!(
            err,
            AuthError::Callback("Malformed OAuth callback: empty fragment".to_string())
        );
    }
}
