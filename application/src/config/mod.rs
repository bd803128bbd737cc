//! Application-level configuration.
//!
//! Controls how the login gate behaves: how long initialization may take
//! and where an accepted session lands.

mod login_config;

pub use login_config::LoginConfig;
