//! Warden Axum Integration
//!
//! Axum middleware and extractors for enforcing Warden authentication.
//!
//! # Overview
//!
//! - **Middleware**: [`AuthLayer`] extracts the bearer token, authenticates
//!   it, and evaluates the route policy before any handler runs.
//! - **Policy**: [`RoutePolicy`] is the central, auditable mapping from
//!   route to required roles — authorization lives in one table, not
//!   scattered over handlers.
//! - **Extractors**: [`AuthPrincipal`] (401 if missing) and
//!   [`MaybePrincipal`] (optional) read the principal the layer bound.
//!
//! # Quick Start
//!
//! ```ignore
//! use warden_axum::{AuthLayer, AuthPrincipal, RoleRequirement, RoutePolicy};
//! use warden_types::Role;
//!
//! let policy = RoutePolicy::new()
//!     .public("/login")
//!     .require("/secured/admin", RoleRequirement::role(Role::Admin));
//!
//! let app = Router::new()
//!     .route("/secured/admin", get(admin_handler))
//!     .layer(AuthLayer::new(auth_service, policy));
//! ```

pub mod error;
pub mod extractors;
pub mod layer;
pub mod policy;

pub use error::Rejection;
pub use extractors::{AuthPrincipal, MaybePrincipal, PrincipalExt};
pub use layer::{AuthLayer, AuthMiddleware};
pub use policy::{Access, Decision, RoleRequirement, RoutePolicy};
