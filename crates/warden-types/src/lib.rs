//! Warden shared types
//!
//! Domain types used across the auth core, the axum integration, and the
//! API service: user identities, roles, and the per-request principal.

pub mod identity;
pub mod principal;
pub mod role;

pub use identity::{Identity, UserId};
pub use principal::Principal;
pub use role::Role;
