//! Login gate use case
//!
//! Decides, on page load, whether the visitor already holds an allowed
//! session or must be shown the sign-in form, and processes the OAuth
//! redirect callback.
//!
//! # Flow
//!
//! ```text
//! initialize()
//!    │
//!    ├── fragment present ──> session_from_callback ─┐
//!    │                                               ├─> EmailDomainPolicy::validate
//!    └── fragment empty ────> get_session ───────────┘          │
//!                                                               v
//!                       Accepted ──> clear fragment*, navigate(home, replace)
//!                       Rejected ──> sign_out, clear fragment*, error message
//!                       NoSession ─> sign-in form
//!                                     (* callback pass only)
//!
//! raced against the fail-safe timer: whichever finishes first commits,
//! the other is dropped.
//! ```
//!
//! All state lives in one `watch` channel owned by the gate. Resolution
//! (provider calls, sign-out) happens inside the race; side effects visible
//! to the user (fragment, navigation, toasts, state) are committed only by
//! the winner, with no await in between.

use crate::config::LoginConfig;
use crate::ports::identity_provider::{AuthError, IdentityProvider};
use crate::ports::location::LocationPort;
use crate::ports::navigator::{NavigateOptions, Navigator};
use crate::ports::notifier::{Notifier, Toast};
use poliseek_domain::{
    DOMAIN_ERROR_MESSAGE, EmailDomainPolicy, LoginViewState, OAuthCallback, OAuthSignInRequest,
    PolicyVerdict,
};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use url::Url;

const LOGIN_ERROR_TITLE: &str = "Login error";
const LOGIN_ERROR_DESCRIPTION: &str = "An error occurred while processing your login";
const SIGN_IN_ERROR_TITLE: &str = "Sign in error";
const SIGN_IN_ERROR_DESCRIPTION: &str = "Failed to sign in with Google. Please try again.";

/// Which path initialization took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// The URL fragment carried an OAuth callback
    Callback,
    /// No fragment; looked for a session that already exists
    Existing,
}

/// Result of the session lookup, before anything is committed
#[derive(Debug)]
enum Resolution {
    Verdict(PolicyVerdict),
    Failed(AuthError),
}

/// Use case driving the login screen.
///
/// # Examples
///
/// ```ignore
/// let gate = LoginGate::new(provider, navigator, notifier, location, LoginConfig::default());
/// let mut view = gate.subscribe();
/// let settled = gate.initialize().await;
/// if settled.can_sign_in() {
///     gate.sign_in().await?;
/// }
/// ```
pub struct LoginGate {
    provider: Arc<dyn IdentityProvider>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    location: Arc<dyn LocationPort>,
    config: LoginConfig,
    policy: EmailDomainPolicy,
    state: watch::Sender<LoginViewState>,
    cancellation_token: Option<CancellationToken>,
}

impl LoginGate {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        location: Arc<dyn LocationPort>,
        config: LoginConfig,
    ) -> Self {
        let (state, _) = watch::channel(LoginViewState::new());
        Self {
            provider,
            navigator,
            notifier,
            location,
            config,
            policy: EmailDomainPolicy,
            state,
            cancellation_token: None,
        }
    }

    /// Set a cancellation token fired when the login screen is torn down
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Current view state
    pub fn state(&self) -> LoginViewState {
        self.state.borrow().clone()
    }

    /// Receive every state transition
    pub fn subscribe(&self) -> watch::Receiver<LoginViewState> {
        self.state.subscribe()
    }

    /// Run initialization to completion and return the settled state.
    ///
    /// Returns within `init_timeout` unless the gate is torn down first, in
    /// which case the state is left untouched.
    pub async fn initialize(&self) -> LoginViewState {
        let fragment = self.location.fragment();
        let source = if OAuthCallback::is_present(&fragment) {
            Source::Callback
        } else {
            Source::Existing
        };
        info!(
            "Checking login state, callback present: {}",
            source == Source::Callback
        );

        if source == Source::Callback {
            self.state.send_modify(|s| s.loading = true);
        }

        let teardown = self.cancellation_token.clone().unwrap_or_default();
        let winner = tokio::select! {
            biased;
            _ = teardown.cancelled() => {
                debug!("Login screen torn down during initialization");
                return self.state();
            }
            resolution = self.resolve(source, &fragment) => Some(resolution),
            _ = tokio::time::sleep(self.config.init_timeout) => None,
        };

        match winner {
            Some(resolution) => self.commit(source, resolution),
            None => {
                warn!(
                    "Login init timeout reached after {:?}, exiting loading state",
                    self.config.init_timeout
                );
                self.state.send_replace(LoginViewState::sign_in_form());
            }
        }

        self.state()
    }

    /// Start the OAuth sign-in with the domain hints.
    ///
    /// On success the browser is sent to the returned URL and the view stays
    /// loading. On failure a toast is shown and the form becomes usable again.
    pub async fn sign_in(&self) -> Result<Url, AuthError> {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let mut request = OAuthSignInRequest::google_for_domain();
        if let Some(redirect_to) = &self.config.redirect_to {
            request = request.with_redirect_to(redirect_to.clone());
        }

        match self.provider.sign_in_with_oauth(&request).await {
            Ok(url) => {
                info!("Redirecting to {} for sign-in", request.provider);
                self.location.assign(&url);
                Ok(url)
            }
            Err(e) => {
                error!("Error signing in with Google: {}", e);
                self.notifier
                    .notify(Toast::destructive(SIGN_IN_ERROR_TITLE, SIGN_IN_ERROR_DESCRIPTION));
                self.state.send_replace(LoginViewState::sign_in_form());
                Err(e)
            }
        }
    }

    /// Fetch the session and apply the policy, revoking rejected sessions.
    ///
    /// Nothing here is visible to the user; see [`Self::commit`].
    async fn resolve(&self, source: Source, fragment: &str) -> Resolution {
        let fetched = match source {
            Source::Callback => self.provider.session_from_callback(fragment).await,
            Source::Existing => self.provider.get_session().await,
        };

        let session = match fetched {
            Ok(session) => session,
            Err(e) => return Resolution::Failed(e),
        };

        let verdict = self.policy.validate(session);
        if let PolicyVerdict::RejectedWrongDomain { email } = &verdict {
            error!(
                "Invalid email domain: {}",
                email.as_deref().unwrap_or("<none>")
            );
            // Revocation failure must not let the account through.
            if let Err(e) = self.provider.sign_out().await {
                warn!("Sign-out of rejected session failed: {}", e);
            }
        }

        Resolution::Verdict(verdict)
    }

    /// Apply the winning resolution. Synchronous so it cannot be interleaved.
    fn commit(&self, source: Source, resolution: Resolution) {
        match resolution {
            Resolution::Verdict(PolicyVerdict::Accepted(session)) => {
                info!(
                    "Session accepted for {}, redirecting to {}",
                    session.email().unwrap_or_default(),
                    self.config.home_route
                );
                if source == Source::Callback {
                    self.location.clear_fragment();
                }
                self.state.send_replace(LoginViewState::redirecting());
                self.navigator
                    .navigate(&self.config.home_route, NavigateOptions::replace());
            }
            Resolution::Verdict(PolicyVerdict::RejectedWrongDomain { .. }) => {
                if source == Source::Callback {
                    self.location.clear_fragment();
                }
                self.state
                    .send_replace(LoginViewState::rejected(DOMAIN_ERROR_MESSAGE));
            }
            Resolution::Verdict(PolicyVerdict::NoSession) => {
                debug!("No session found");
                self.state.send_replace(LoginViewState::sign_in_form());
            }
            Resolution::Failed(e) => {
                match source {
                    Source::Callback => {
                        error!("Error handling hash parameters: {}", e);
                        self.notifier
                            .notify(Toast::destructive(LOGIN_ERROR_TITLE, LOGIN_ERROR_DESCRIPTION));
                    }
                    Source::Existing => error!("Error checking session: {}", e),
                }
                self.state.send_replace(LoginViewState::sign_in_form());
            }
        }
    }
}
