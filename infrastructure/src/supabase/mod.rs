//! Supabase auth (GoTrue) adapter.
//!
//! Implements [`IdentityProvider`](poliseek_application::IdentityProvider)
//! against the `/auth/v1` REST endpoints:
//!
//! | Operation             | Endpoint                                   |
//! |-----------------------|--------------------------------------------|
//! | resolve callback user | `GET  /auth/v1/user`                       |
//! | refresh session       | `POST /auth/v1/token?grant_type=refresh_token` |
//! | sign out              | `POST /auth/v1/logout`                     |
//! | sign in               | `GET  /auth/v1/authorize?provider=…` (browser) |

pub mod client;
pub mod error;
mod types;

pub use client::{SupabaseAuthClient, SupabaseConfig};
pub use error::SupabaseError;
