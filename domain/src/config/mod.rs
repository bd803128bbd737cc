//! Configuration value objects for the domain layer
//!
//! Issue types shared by the config loader (infrastructure) and the
//! binary that reports them.

pub mod validation;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
