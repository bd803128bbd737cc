//! Domain layer for poliseek
//!
//! This crate contains the data shared with the chat backend, the sign-in
//! policy, and the state the login screen renders from. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Domain allow-list
//!
//! Only accounts whose email ends with `@neu.edu.ph` (case-insensitive) may
//! sign in. [`EmailDomainPolicy::validate`] is the single place that decides,
//! returning a [`PolicyVerdict`].
//!
//! ## Login phases
//!
//! The login screen starts in [`LoginPhase::Initializing`] and settles in
//! exactly one of `Redirecting`, `ShowingError` or `ShowingSignInForm`.

pub mod auth;
pub mod chat;
pub mod config;
pub mod core;
pub mod search_bar;

// Re-export commonly used types
pub use auth::{
    callback::{CallbackTokens, OAuthCallback, expiry_after},
    policy::{
        ALLOWED_EMAIL_DOMAIN, DOMAIN_ERROR_MESSAGE, EmailDomainPolicy, HOSTED_DOMAIN_HINT,
        PolicyVerdict,
    },
    session::{AuthSession, AuthUser},
    sign_in::{DEFAULT_OAUTH_PROVIDER, OAuthSignInRequest},
    view_state::{LoginPhase, LoginViewState},
};
pub use chat::{
    documents::{DocumentSection, ReferenceDocument},
    entities::{ChatSession, Message, Sender},
    record::ChatRecord,
};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, string::mask_secret};
pub use search_bar::SearchBarMode;
