//! Sign-in domain.
//!
//! - [`policy::EmailDomainPolicy`] — the `@neu.edu.ph` allow-list
//! - [`session::AuthSession`] — a session issued by the identity provider
//! - [`callback::OAuthCallback`] — session data carried in the redirect fragment
//! - [`sign_in::OAuthSignInRequest`] — an authorization request with domain hints
//! - [`view_state::LoginViewState`] — what the login screen currently shows

pub mod callback;
pub mod policy;
pub mod session;
pub mod sign_in;
pub mod view_state;
