//! Login screen state.
//!
//! ```text
//! Initializing ──┬──> Redirecting        (accepted session)
//!                ├──> ShowingError       (wrong domain, signed out)
//!                └──> ShowingSignInForm  (no session, provider error, fail-safe)
//! ```

use serde::{Deserialize, Serialize};

/// Observable phase of the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginPhase {
    #[default]
    Initializing,
    /// An allowed session exists; navigating to the home route
    Redirecting,
    /// A session was rejected by the domain policy; the message stays visible
    ShowingError,
    ShowingSignInForm,
}

impl LoginPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginPhase::Initializing => "initializing",
            LoginPhase::Redirecting => "redirecting",
            LoginPhase::ShowingError => "showing_error",
            LoginPhase::ShowingSignInForm => "showing_sign_in_form",
        }
    }

    /// Whether initialization has finished, one way or another
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoginPhase::Initializing)
    }

    /// Whether the sign-in card (form or error) is on screen
    pub fn shows_form(&self) -> bool {
        matches!(self, LoginPhase::ShowingError | LoginPhase::ShowingSignInForm)
    }
}

impl std::fmt::Display for LoginPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the login view renders from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginViewState {
    pub phase: LoginPhase,
    /// A provider call is in flight; the sign-in button is disabled
    pub loading: bool,
    /// Persistent error shown above the sign-in button
    pub error: Option<String>,
}

impl LoginViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in_form() -> Self {
        Self {
            phase: LoginPhase::ShowingSignInForm,
            loading: false,
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            phase: LoginPhase::ShowingError,
            loading: false,
            error: Some(message.into()),
        }
    }

    pub fn redirecting() -> Self {
        Self {
            phase: LoginPhase::Redirecting,
            loading: false,
            error: None,
        }
    }

    /// Whether the sign-in button accepts activation
    pub fn can_sign_in(&self) -> bool {
        self.phase.shows_form() && !self.loading
    }
}
