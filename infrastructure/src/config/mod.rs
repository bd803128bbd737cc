//! Configuration file loading for poliseek
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `POLISEEK_*` environment variables (`POLISEEK_AUTH__URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./poliseek.toml` or `./.poliseek.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/poliseek/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAuthConfig, FileConfig, FileLoggingConfig, FileLoginConfig, FileOutputConfig,
    FileSessionConfig,
};
pub use loader::ConfigLoader;
