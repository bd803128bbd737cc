//! OAuth sign-in request

use crate::auth::policy::{ALLOWED_EMAIL_DOMAIN, HOSTED_DOMAIN_HINT};

/// OAuth provider used for sign-in
pub const DEFAULT_OAUTH_PROVIDER: &str = "google";

/// An authorization request with advisory domain hints.
///
/// The hints only narrow the account picker; the post-callback
/// [`EmailDomainPolicy`](crate::auth::policy::EmailDomainPolicy) check is
/// what actually enforces the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthSignInRequest {
    pub provider: String,
    pub redirect_to: Option<String>,
    pub query_params: Vec<(String, String)>,
}

impl OAuthSignInRequest {
    /// Google sign-in restricted to the university domain
    pub fn google_for_domain() -> Self {
        Self {
            provider: DEFAULT_OAUTH_PROVIDER.to_string(),
            redirect_to: None,
            query_params: vec![
                ("hd".to_string(), HOSTED_DOMAIN_HINT.to_string()),
                ("login_hint".to_string(), ALLOWED_EMAIL_DOMAIN.to_string()),
                ("access_type".to_string(), "offline".to_string()),
                ("prompt".to_string(), "select_account".to_string()),
            ],
        }
    }

    pub fn with_redirect_to(mut self, redirect_to: impl Into<String>) -> Self {
        self.redirect_to = Some(redirect_to.into());
        self
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
