//! Warden Auth Core - Authentication business logic
//!
//! Core authentication functionality: stateless JWT issuance and
//! verification, Argon2 credential checks, and the authenticator that turns
//! a bearer token into a request-scoped [`Principal`].
//!
//! [`Principal`]: warden_types::Principal

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod store;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::AuthService;
pub use store::{IdentityStore, MemoryIdentityStore, StoreError};
pub use token::{AccessClaims, TokenCodec};
