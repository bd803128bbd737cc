//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types at the
//! edge.

mod auth;
mod logging;
mod login;
mod output;
mod session;

pub use auth::FileAuthConfig;
pub use logging::FileLoggingConfig;
pub use login::FileLoginConfig;
pub use output::FileOutputConfig;
pub use session::FileSessionConfig;

use poliseek_domain::{ConfigIssue, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Identity provider (Supabase) settings
    pub auth: FileAuthConfig,
    /// Login gate settings
    pub login: FileLoginConfig,
    /// Session persistence
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. `auth.url` and `auth.anon_key` are present and the URL parses
    /// 2. `auth.redirect_to` parses when set
    /// 3. The fail-safe timeout is positive
    /// 4. The home route is an absolute in-app path
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Auth backend
        match self.auth.url.as_deref().map(str::trim) {
            None | Some("") => issues.push(ConfigIssue::missing("auth.url", Severity::Error)),
            Some(raw) => {
                if let Err(e) = url::Url::parse(raw) {
                    issues.push(ConfigIssue::invalid(
                        "auth.url",
                        raw,
                        format!("auth.url is not a valid URL: {}", e),
                    ));
                }
            }
        }
        if self.auth.anon_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            issues.push(ConfigIssue::missing("auth.anon_key", Severity::Error));
        }

        // 2. Redirect target
        if let Some(raw) = self.auth.redirect_to.as_deref()
            && url::Url::parse(raw).is_err()
        {
            issues.push(ConfigIssue::invalid(
                "auth.redirect_to",
                raw,
                "auth.redirect_to is not a valid URL",
            ));
        }

        // 3. Fail-safe
        if self.login.init_timeout_ms == 0 {
            issues.push(ConfigIssue::invalid(
                "login.init_timeout_ms",
                "0",
                "login.init_timeout_ms must be greater than zero",
            ));
        }

        // 4. Home route
        if !self.login.home_route.starts_with('/') {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                ..ConfigIssue::invalid(
                    "login.home_route",
                    self.login.home_route.clone(),
                    format!(
                        "login.home_route '{}' is not absolute, '/' will be prepended",
                        self.login.home_route
                    ),
                )
            });
        }

        issues
    }

    /// Home route with a guaranteed leading slash
    pub fn home_route(&self) -> String {
        if self.login.home_route.starts_with('/') {
            self.login.home_route.clone()
        } else {
            format!("/{}", self.login.home_route)
        }
    }
}
