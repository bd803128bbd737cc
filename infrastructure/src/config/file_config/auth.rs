//! Identity provider configuration from TOML (`[auth]` section)

use serde::{Deserialize, Serialize};

/// Raw auth backend configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Base URL of the Supabase project, e.g. `https://xyz.supabase.co`
    pub url: Option<String>,
    /// Public anon key sent as the `apikey` header
    pub anon_key: Option<String>,
    /// Where the provider redirects back to after sign-in
    pub redirect_to: Option<String>,
}
