//! Interactive login screen
//!
//! Runs the login gate with the view following it, then waits for the user
//! to press Enter (sign in) or quit.

use super::view::LoginView;
use crate::navigation::ConsoleNavigator;
use poliseek_application::LoginGate;
use poliseek_domain::LoginPhase;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

/// Route the login screen lives on
pub const LOGIN_ROUTE: &str = "/login";

/// How the login screen was left
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// An allowed session exists; continue on `route`
    SignedIn { route: String },
    /// The browser was sent to the identity provider
    RedirectStarted(Url),
    Quit,
    /// Interrupted (Ctrl-C) before anything settled
    TornDown,
}

pub struct LoginScreen {
    gate: LoginGate,
    view: LoginView,
    navigator: Arc<ConsoleNavigator>,
    teardown: CancellationToken,
}

impl LoginScreen {
    /// `gate` must have been built with `navigator` and `teardown`
    pub fn new(
        gate: LoginGate,
        view: LoginView,
        navigator: Arc<ConsoleNavigator>,
        teardown: CancellationToken,
    ) -> Self {
        Self {
            gate,
            view,
            navigator,
            teardown,
        }
    }

    pub async fn run<R>(&self, input: R) -> LoginOutcome
    where
        R: AsyncBufRead + Unpin,
    {
        let (settled, _) = tokio::join!(
            self.gate.initialize(),
            self.view.follow(self.gate.subscribe(), self.teardown.clone())
        );

        if self.teardown.is_cancelled() {
            return LoginOutcome::TornDown;
        }
        if settled.phase == LoginPhase::Redirecting {
            return LoginOutcome::SignedIn {
                route: self.navigator.current(),
            };
        }

        let mut lines = input.lines();
        loop {
            let state = self.gate.state();
            if let Some(card) = LoginView::render(&state) {
                println!("{}", card);
            }

            let line = tokio::select! {
                _ = self.teardown.cancelled() => return LoginOutcome::TornDown,
                line = lines.next_line() => line,
            };
            let line = match line {
                Ok(Some(line)) => line,
                Ok(None) => return LoginOutcome::Quit,
                Err(e) => {
                    debug!("Input closed: {}", e);
                    return LoginOutcome::Quit;
                }
            };

            match line.trim() {
                "q" | "/q" | "/quit" => return LoginOutcome::Quit,
                "" if state.can_sign_in() => {
                    // Failures were already reported as a toast; show the card again.
                    if let Ok(url) = self.gate.sign_in().await {
                        return LoginOutcome::RedirectStarted(url);
                    }
                }
                "" => {}
                other => eprintln!("Unknown input: {} (Enter signs in, q quits)", other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::notifier::ConsoleNotifier;
    use async_trait::async_trait;
    use poliseek_application::{AuthError, IdentityProvider, LocationPort, LoginConfig};
    use poliseek_domain::{AuthSession, AuthUser, OAuthSignInRequest};
    use poliseek_infrastructure::MemoryLocation;

    struct StubProvider {
        email: Option<&'static str>,
        sign_in_fails: bool,
    }

    impl StubProvider {
        fn new(email: Option<&'static str>) -> Self {
            Self {
                email,
                sign_in_fails: false,
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for StubProvider {
        async fn get_session(&self) -> Result<Option<AuthSession>, AuthError> {
            Ok(self.email.map(|email| {
                AuthSession::new(
                    "token",
                    AuthUser {
                        id: "u-1".to_string(),
                        email: Some(email.to_string()),
                    },
                )
            }))
        }

        async fn sign_in_with_oauth(
            &self,
            request: &OAuthSignInRequest,
        ) -> Result<Url, AuthError> {
            if self.sign_in_fails {
                return Err(AuthError::Network("offline".to_string()));
            }
            let mut url = Url::parse("https://auth.example.com/authorize").unwrap();
            url.query_pairs_mut().append_pair("provider", &request.provider);
            Ok(url)
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }
    }

    fn screen(provider: StubProvider) -> (LoginScreen, Arc<ConsoleNavigator>, Arc<MemoryLocation>) {
        let navigator = Arc::new(ConsoleNavigator::new(LOGIN_ROUTE));
        let notifier = Arc::new(ConsoleNotifier::new());
        let location = Arc::new(MemoryLocation::new());
        let teardown = CancellationToken::new();
        let gate = LoginGate::new(
            Arc::new(provider),
            navigator.clone(),
            notifier.clone(),
            location.clone() as Arc<dyn LocationPort>,
            LoginConfig::default(),
        )
        .with_cancellation(teardown.clone());
        let view = LoginView::new(notifier).with_progress(false);
        (
            LoginScreen::new(gate, view, navigator.clone(), teardown),
            navigator,
            location,
        )
    }

    #[tokio::test]
    async fn test_allowed_session_goes_home() {
        let (screen, navigator, _) = screen(StubProvider::new(Some("ana@neu.edu.ph")));
        let outcome = screen.run(&b""[..]).await;
        assert_eq!(
            outcome,
            LoginOutcome::SignedIn {
                route: "/".to_string()
            }
        );
        assert_eq!(navigator.history(), ["/"]);
    }

    #[tokio::test]
    async fn test_enter_starts_redirect() {
        let (screen, _, location) = screen(StubProvider::new(None));
        let outcome = screen.run(&b"\n"[..]).await;
        match outcome {
            LoginOutcome::RedirectStarted(url) => {
                assert_eq!(location.assigned(), Some(url));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_sign_in_returns_to_card() {
        let mut provider = StubProvider::new(None);
        provider.sign_in_fails = true;
        let (screen, _, location) = screen(provider);
        let outcome = screen.run(&b"\nq\n"[..]).await;
        assert_eq!(outcome, LoginOutcome::Quit);
        assert!(location.assigned().is_none());
        assert!(screen.gate.state().can_sign_in());
    }

    #[tokio::test]
    async fn test_rejected_account_can_retry() {
        let (screen, navigator, location) = screen(StubProvider::new(Some("ana@gmail.com")));
        let outcome = screen.run(&b"\n"[..]).await;
        assert!(matches!(outcome, LoginOutcome::RedirectStarted(_)));
        assert!(location.assigned().is_some());
        assert_eq!(navigator.current(), LOGIN_ROUTE);
    }

    #[tokio::test]
    async fn test_end_of_input_quits() {
        let (screen, _, _) = screen(StubProvider::new(None));
        assert_eq!(screen.run(&b""[..]).await, LoginOutcome::Quit);
    }

    #[tokio::test]
    async fn test_teardown() {
        let (screen, _, _) = screen(StubProvider::new(None));
        screen.teardown.cancel();
        assert_eq!(screen.run(&b"\n"[..]).await, LoginOutcome::TornDown);
    }
}
