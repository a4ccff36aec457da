//! Auth errors

use thiserror::Error;

use crate::store::StoreError;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid token (malformed, bad signature, etc.)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// Invalid credentials (unknown user or wrong password)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Token subject does not resolve to a stored identity
    #[error("user not found")]
    UserNotFound,

    /// Identity exists but is disabled
    #[error("user disabled")]
    UserDisabled,

    /// Principal lacks a required role
    #[error("insufficient role: requires {0}")]
    InsufficientRole(String),

    /// Identity store error
    #[error("store error: {0}")]
    Store(String),

    /// Configuration error (startup-fatal)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get HTTP status code for this error.
    ///
    /// All authentication denials map to 401, including the unresolvable or
    /// disabled subject cases: a bearer presenting a token for a deleted
    /// account gets a clean 401, never a 5xx.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidToken
            | Self::TokenExpired
            | Self::InvalidCredentials
            | Self::UserNotFound
            | Self::UserDisabled => 401,
            Self::InsufficientRole(_) => 403,
            Self::Store(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Get error code for logs and diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserDisabled => "USER_DISABLED",
            Self::InsufficientRole(_) => "INSUFFICIENT_ROLE",
            Self::Store(_) => "STORE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        tracing::error!("identity store error: {}", err);
        Self::Store(err.to_string())
    }
}
