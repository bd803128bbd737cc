//! OAuth redirect callback carried in the URL fragment.
//!
//! After the user authenticates, the identity provider redirects back with
//! either tokens or an error in the fragment:
//!
//! ```text
//! #access_token=eyJ...&expires_in=3600&refresh_token=r1&token_type=bearer
//! #error=access_denied&error_description=User+cancelled
//! ```

use crate::core::error::DomainError;
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Tokens issued by a successful callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: String,
    pub expires_in: Option<i64>,
    pub expires_at: Option<i64>,
    pub provider_token: Option<String>,
}

impl CallbackTokens {
    /// Absolute expiry, preferring the provider's `expires_at` over `expires_in`.
    pub fn expiry(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if let Some(at) = self.expires_at {
            return Utc.timestamp_opt(at, 0).single();
        }
        self.expires_in.and_then(|secs| expiry_after(now, secs))
    }
}

/// `now + secs`, or `None` when the result falls outside the representable range.
pub fn expiry_after(now: DateTime<Utc>, secs: i64) -> Option<DateTime<Utc>> {
    Duration::try_seconds(secs).and_then(|delta| now.checked_add_signed(delta))
}

/// Parsed OAuth callback fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthCallback {
    Tokens(CallbackTokens),
    Error {
        error: String,
        description: Option<String>,
    },
}

impl OAuthCallback {
    /// Whether a fragment carries anything at all. `""` and `"#"` do not.
    pub fn is_present(fragment: &str) -> bool {
        !fragment.trim_start_matches('#').trim().is_empty()
    }

    /// Parse a URL fragment, with or without the leading `#`.
    ///
    /// Values are percent-decoded. A fragment that has neither `access_token`
    /// nor `error` is malformed.
    pub fn parse(fragment: &str) -> Result<Self, DomainError> {
        let raw = fragment.trim_start_matches('#');
        if raw.trim().is_empty() {
            return Err(DomainError::MalformedCallback("empty fragment".to_string()));
        }

        let mut access_token = None;
        let mut refresh_token = None;
        let mut token_type = None;
        let mut expires_in = None;
        let mut expires_at = None;
        let mut provider_token = None;
        let mut error = None;
        let mut description = None;

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "access_token" => access_token = Some(value),
                "refresh_token" => refresh_token = Some(value),
                "token_type" => token_type = Some(value),
                "expires_in" => {
                    let secs = parse_seconds("expires_in", &value)?;
                    if Duration::try_seconds(secs).is_none() {
                        return Err(DomainError::MalformedCallback(format!(
                            "expires_in out of range: {}",
                            value
                        )));
                    }
                    expires_in = Some(secs);
                }
                "expires_at" => expires_at = Some(parse_seconds("expires_at", &value)?),
                "provider_token" => provider_token = Some(value),
                "error" => error = Some(value),
                "error_description" => description = Some(value),
                _ => {}
            }
        }

        if let Some(error) = error {
            return Ok(OAuthCallback::Error { error, description });
        }

        match access_token {
            Some(access_token) if !access_token.is_empty() => {
                Ok(OAuthCallback::Tokens(CallbackTokens {
                    access_token,
                    refresh_token,
                    token_type: token_type.unwrap_or_else(|| "bearer".to_string()),
                    expires_in,
                    expires_at,
                    provider_token,
                }))
            }
            _ => Err(DomainError::MalformedCallback(
                "fragment has no access_token".to_string(),
            )),
        }
    }

    /// Convert into tokens, turning a provider error into a [`DomainError`].
    pub fn into_tokens(self) -> Result<CallbackTokens, DomainError> {
        match self {
            OAuthCallback::Tokens(tokens) => Ok(tokens),
            OAuthCallback::Error { error, description } => {
                Err(DomainError::ProviderRejected { error, description })
            }
        }
    }
}

fn parse_seconds(field: &str, value: &str) -> Result<i64, DomainError> {
    value
        .parse()
        .map_err(|_| DomainError::MalformedCallback(format!("{} is not a number: {}", field, value)))
}
