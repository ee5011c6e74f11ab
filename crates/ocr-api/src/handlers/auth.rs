//! Session endpoints: login, logout, current identity.

use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use ocr_store::Session;
use ocr_types::User;

use crate::auth::SessionToken;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /login — exchange an email for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Session>, ApiError> {
    let session = state.store.login(&req.email, &req.password)?;
    Ok(Json(session))
}

/// POST /logout — revoke the calling session.
pub async fn logout(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Json<serde_json::Value> {
    state.store.logout(&token.0);
    Json(serde_json::json!({ "logged_out": true }))
}

/// GET /me — the calling identity.
pub async fn me(Extension(user): Extension<User>) -> Json<User> {
    Json(user)
}
