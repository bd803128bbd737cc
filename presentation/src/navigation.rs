//! In-app routing for the terminal front end

use poliseek_application::{NavigateOptions, Navigator};
use std::sync::Mutex;
use tracing::debug;

/// Tracks the current route and a back-stack.
///
/// Routes are plain paths such as `/` or `/login`; the binary decides what
/// to draw for the current one.
pub struct ConsoleNavigator {
    history: Mutex<Vec<String>>,
}

impl ConsoleNavigator {
    pub fn new(initial_route: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(vec![initial_route.into()]),
        }
    }

    pub fn current(&self) -> String {
        self.history
            .lock()
            .ok()
            .and_then(|h| h.last().cloned())
            .unwrap_or_default()
    }

    /// Routes that can be returned to, oldest first, current last
    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &str, options: NavigateOptions) {
        debug!("Navigating to {} (replace: {})", route, options.replace);
        if let Ok(mut history) = self.history.lock() {
            if options.replace {
                history.pop();
            }
            history.push(route.to_string());
        }
    }
}
