//! Session persistence configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw session storage configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Keep the session on disk between runs
    pub persist: bool,
    /// Override for the session file (default: `<data dir>/poliseek/session.json`)
    pub store_path: Option<PathBuf>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            persist: true,
            store_path: None,
        }
    }
}

impl FileSessionConfig {
    /// Resolve the session file path, if persistence is on
    pub fn resolved_store_path(&self) -> Option<PathBuf> {
        if !self.persist {
            return None;
        }
        self.store_path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("poliseek").join("session.json")))
    }
}
