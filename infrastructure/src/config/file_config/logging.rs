//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Default filter when `-v` and `RUST_LOG` are absent (e.g. `"warn"`)
    pub level: Option<String>,
    /// Directory for daily-rolling log files; console only when unset
    pub directory: Option<PathBuf>,
}
