//! Login gate parameters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default upper bound on the initializing state.
pub const DEFAULT_INIT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default route an accepted session is sent to.
pub const DEFAULT_HOME_ROUTE: &str = "/";

/// Login gate configuration.
///
/// The allowed email domain is deliberately absent: it is a fixed policy
/// value in the domain layer, not a setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Fail-safe: leave `Initializing` after this long no matter what.
    pub init_timeout: Duration,
    /// Route navigated to (with history replacement) once a session is accepted.
    pub home_route: String,
    /// Where the identity provider should send the user back to.
    pub redirect_to: Option<String>,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            init_timeout: DEFAULT_INIT_TIMEOUT,
            home_route: DEFAULT_HOME_ROUTE.to_string(),
            redirect_to: None,
        }
    }
}

impl LoginConfig {
    // ==================== Builder Methods ====================

    pub fn with_init_timeout(mut self, timeout: Duration) -> Self {
        self.init_timeout = timeout;
        self
    }

    pub fn with_init_timeout_millis(self, millis: u64) -> Self {
        self.with_init_timeout(Duration::from_millis(millis))
    }

    pub fn with_home_route(mut self, route: impl Into<String>) -> Self {
        self.home_route = route.into();
        self
    }

    pub fn with_redirect_to(mut self, redirect_to: Option<String>) -> Self {
        self.redirect_to = redirect_to;
        self
    }
}
