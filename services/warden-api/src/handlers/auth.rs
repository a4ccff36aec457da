//! Authentication handlers (login)

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login
///
/// Verify a username/password pair and return a signed bearer token.
/// Unknown user and wrong password both come back as a bare 401.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = state.auth.login(&req.username, &req.password).await?;
    Ok(Json(LoginResponse { token }))
}
