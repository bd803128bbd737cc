//! Use cases (application services)
//!
//! - [`login_gate::LoginGate`] — initialization, OAuth callback handling and sign-in
//! - [`session_status::SessionStatusUseCase`] — side-effect-free policy check

pub mod login_gate;
pub mod session_status;
