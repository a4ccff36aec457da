//! Error types for the Warden API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use warden_core::AuthError;

/// API error type.
///
/// Authentication and authorization denials translate to bare status codes
/// with no body: the response must not reveal whether the username, the
/// password, or the token was at fault.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("authentication failure")]
    Auth(#[from] AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Auth(err) = self;

        // Internal faults are logged server-side; the wire sees status only
        if err.status_code() >= 500 {
            tracing::error!(code = err.error_code(), error = %err, "internal API error");
        } else {
            tracing::debug!(code = err.error_code(), "request denied");
        }

        StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
