//! Login gate configuration from TOML (`[login]` section)

use poliseek_application::LoginConfig;
use serde::{Deserialize, Serialize};

/// Raw login configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoginConfig {
    /// Fail-safe bound on the initializing state, in milliseconds
    pub init_timeout_ms: u64,
    /// Route to land on after an accepted sign-in
    pub home_route: String,
}

impl Default for FileLoginConfig {
    fn default() -> Self {
        Self {
            init_timeout_ms: 2000,
            home_route: "/".to_string(),
        }
    }
}

impl FileLoginConfig {
    /// Build the application config; `redirect_to` comes from `[auth]`.
    pub fn to_login_config(&self, redirect_to: Option<String>) -> LoginConfig {
        LoginConfig::default()
            .with_init_timeout_millis(self.init_timeout_ms)
            .with_home_route(self.home_route.clone())
            .with_redirect_to(redirect_to)
    }
}
