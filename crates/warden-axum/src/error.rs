//! Error types for auth middleware and extractors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Rejections produced at the auth boundary.
///
/// Responses carry the status code and nothing else: per-request auth
/// failures never leak internal detail to the wire.
#[derive(Debug, thiserror::Error)]
pub enum Rejection {
    /// No authenticated principal for a protected route
    #[error("authentication required")]
    Unauthenticated,

    /// Principal bound but missing a required role
    #[error("insufficient role")]
    Forbidden,
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
        };
        status.into_response()
    }
}
