//! Presentation-level configuration

use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Open the sign-in URL in the system browser
    pub open_browser: bool,
    /// Show the spinner while the login screen initializes
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            open_browser: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color preference process-wide
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
