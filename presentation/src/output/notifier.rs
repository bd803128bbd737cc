//! Toast notifications on the terminal

use super::console::ConsoleFormatter;
use indicatif::ProgressBar;
use poliseek_application::{Notifier, Toast};
use std::sync::Mutex;

/// Prints toasts to stderr.
///
/// While a spinner is on screen the toast is printed above it instead of
/// being drawn over.
#[derive(Default)]
pub struct ConsoleNotifier {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route output through `spinner` until [`Self::detach`] is called
    pub fn attach(&self, spinner: ProgressBar) {
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    pub fn detach(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = None;
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: Toast) {
        let line = ConsoleFormatter::toast(&toast);
        match self.spinner.lock().ok().and_then(|s| s.clone()) {
            Some(spinner) => spinner.println(line),
            None => eprintln!("{}", line),
        }
    }
}
