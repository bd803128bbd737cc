//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — secret masking and suffix helpers

pub mod error;
pub mod string;
