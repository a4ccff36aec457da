//! HTTP handlers

mod auth;
mod health;
mod secured;

pub use auth::login;
pub use health::{health, ready};
pub use secured::{admin, user, user_or_admin};
