//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement. The login gate only ever talks to these.

pub mod identity_provider;
pub mod location;
pub mod navigator;
pub mod notifier;
