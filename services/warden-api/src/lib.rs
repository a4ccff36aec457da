//! Warden API
//!
//! Token-based authentication service: issues signed bearer tokens on
//! login and enforces role-based access on the secured routes through the
//! central route policy.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use warden_axum::{AuthLayer, RoleRequirement, RoutePolicy};
use warden_core::{password, AuthError, MemoryIdentityStore};
use warden_types::{Identity, Role, UserId};

use state::{AppState, AuthServiceImpl};

/// The route-to-requirement table for the whole service.
///
/// This is the single place authorization policy lives; handlers carry no
/// role annotations.
pub fn route_policy() -> RoutePolicy {
    RoutePolicy::new()
        .public("/login")
        .public("/health")
        .public("/ready")
        .require("/secured/user", RoleRequirement::role(Role::User))
        .require("/secured/admin", RoleRequirement::role(Role::Admin))
        .require(
            "/secured/resource/user-or-admin",
            RoleRequirement::any_of([Role::User, Role::Admin]),
        )
}

/// Build the service router with the access filter installed
pub fn app(auth: Arc<AuthServiceImpl>) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/secured/user", get(handlers::user))
        .route("/secured/admin", get(handlers::admin))
        .route(
            "/secured/resource/user-or-admin",
            get(handlers::user_or_admin),
        )
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .layer(AuthLayer::new(Arc::clone(&auth), route_policy()))
        .with_state(AppState::new(auth))
}

/// Provision the demo identities: `user`/`user` with USER and
/// `admin`/`admin` with USER + ADMIN.
pub fn seed_demo_identities(store: &MemoryIdentityStore) -> Result<(), AuthError> {
    store.insert(Identity {
        id: UserId::new(),
        username: "user".to_string(),
        password_hash: password::hash_password("user")?,
        enabled: true,
        roles: vec![Role::User],
    });
    store.insert(Identity {
        id: UserId::new(),
        username: "admin".to_string(),
        password_hash: password::hash_password("admin")?,
        enabled: true,
        roles: vec![Role::User, Role::Admin],
    });
    Ok(())
}
