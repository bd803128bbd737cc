//! Infrastructure layer for poliseek
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod location;
pub mod session_store;
pub mod supabase;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAuthConfig, FileConfig, FileLoggingConfig, FileLoginConfig,
    FileOutputConfig, FileSessionConfig,
};
pub use location::MemoryLocation;
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use supabase::{SupabaseAuthClient, SupabaseConfig, SupabaseError};
