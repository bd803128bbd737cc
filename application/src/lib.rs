//! Application layer for poliseek
//!
//! This crate contains the login gate use case, the ports it drives, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::LoginConfig;
pub use ports::{
    identity_provider::{AuthError, IdentityProvider},
    location::LocationPort,
    navigator::{NavigateOptions, Navigator},
    notifier::{Notifier, Toast, ToastVariant},
};
pub use use_cases::login_gate::LoginGate;
pub use use_cases::session_status::SessionStatusUseCase;
