//! Navigation port
//!
//! In-app routing. The login gate uses it once: to leave the login page for
//! the home route without leaving a history entry to come back to.

/// How a navigation affects history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        Self { replace: true }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str, options: NavigateOptions);
}
