//! Login view: spinner while initializing, then the sign-in card.

use crate::output::console::ConsoleFormatter;
use crate::output::notifier::ConsoleNotifier;
use indicatif::{ProgressBar, ProgressStyle};
use poliseek_domain::LoginViewState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

const INITIALIZING_MESSAGE: &str = "Initializing...";

/// Renders [`LoginViewState`] transitions on the terminal
pub struct LoginView {
    notifier: Arc<ConsoleNotifier>,
    show_progress: bool,
}

impl LoginView {
    pub fn new(notifier: Arc<ConsoleNotifier>) -> Self {
        Self {
            notifier,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg:.bold}") {
            spinner.set_style(style);
        }
        spinner.set_message(INITIALIZING_MESSAGE);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Show the spinner until the state settles, then return the settled state.
    ///
    /// Also returns on teardown or when the gate goes away, with whatever state
    /// was current.
    pub async fn follow(
        &self,
        mut states: watch::Receiver<LoginViewState>,
        teardown: CancellationToken,
    ) -> LoginViewState {
        let spinner = self.spinner();
        self.notifier.attach(spinner.clone());

        let last = loop {
            let state = states.borrow_and_update().clone();
            if state.phase.is_settled() {
                break state;
            }
            tokio::select! {
                _ = teardown.cancelled() => break state,
                changed = states.changed() => {
                    if changed.is_err() {
                        break states.borrow().clone();
                    }
                }
            }
        };

        self.notifier.detach();
        spinner.finish_and_clear();
        last
    }

    /// The screen for a settled state; `None` when the login page is being left.
    pub fn render(state: &LoginViewState) -> Option<String> {
        state
            .phase
            .shows_form()
            .then(|| ConsoleFormatter::login_card(state))
    }
}
