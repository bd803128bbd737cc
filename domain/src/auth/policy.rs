//! Email domain allow-list.
//!
//! Provider-side hints (`hd`, `login_hint`) can be bypassed by the user, so the
//! verdict computed here after the callback is the authoritative check.

use crate::auth::session::AuthSession;
use crate::core::string::ends_with_ignore_ascii_case;

/// The only email suffix allowed to sign in.
pub const ALLOWED_EMAIL_DOMAIN: &str = "@neu.edu.ph";

/// Hosted-domain hint passed to the identity provider.
pub const HOSTED_DOMAIN_HINT: &str = "neu.edu.ph";

/// Message shown when an account from another domain signs in.
pub const DOMAIN_ERROR_MESSAGE: &str =
    "Only emails with @neu.edu.ph domain are allowed to sign in.";

/// Result of checking a (possibly absent) session against the policy.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyVerdict {
    /// The session belongs to an allowed account
    Accepted(AuthSession),
    /// A session exists but its email is outside the allowed domain.
    /// `email` is `None` when the provider returned no email at all.
    RejectedWrongDomain { email: Option<String> },
    /// There is no session to check
    NoSession,
}

impl PolicyVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PolicyVerdict::Accepted(_))
    }
}

/// Email domain allow-list policy
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailDomainPolicy;

impl EmailDomainPolicy {
    /// Case-insensitive suffix match against [`ALLOWED_EMAIL_DOMAIN`].
    pub fn matches(&self, email: &str) -> bool {
        ends_with_ignore_ascii_case(email, ALLOWED_EMAIL_DOMAIN)
    }

    /// Validate a session fetched from the provider.
    ///
    /// A session without an email cannot prove its domain and is rejected.
    pub fn validate(&self, session: Option<AuthSession>) -> PolicyVerdict {
        let Some(session) = session else {
            return PolicyVerdict::NoSession;
        };

        match session.email() {
            Some(email) if self.matches(email) => PolicyVerdict::Accepted(session),
            email => PolicyVerdict::RejectedWrongDomain {
                email: email.map(str::to_string),
            },
        }
    }
}
