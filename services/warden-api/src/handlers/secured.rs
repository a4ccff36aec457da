//! Role-protected resource handlers
//!
//! The role checks live in the route policy, not here: by the time a
//! handler runs, the access filter has already admitted the principal.

use axum::Json;
use serde::Serialize;

use warden_axum::AuthPrincipal;

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// GET /secured/user — requires USER
pub async fn user(_principal: AuthPrincipal) -> Json<Message> {
    Message::new("User resource")
}

/// GET /secured/admin — requires ADMIN
pub async fn admin(_principal: AuthPrincipal) -> Json<Message> {
    Message::new("Admin resource")
}

/// GET /secured/resource/user-or-admin — requires USER or ADMIN
pub async fn user_or_admin(_principal: AuthPrincipal) -> Json<Message> {
    Message::new("User or Admin resource")
}
