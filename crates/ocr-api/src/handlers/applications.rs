//! Application listing, detail and resubmission.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;

use ocr_store::ApplicationFilter;
use ocr_types::{Application, User};

use crate::error::ApiError;
use crate::AppState;

/// GET /applications — the caller's visible applications, filtered.
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(filter): Query<ApplicationFilter>,
) -> Json<Vec<Application>> {
    Json(state.store.list_applications(&user, &filter))
}

/// GET /applications/:id — one application, 404 outside the caller's
/// visibility.
pub async fn detail(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Json<Application>, ApiError> {
    let app = state.store.application(&user, &id)?;
    Ok(Json(app))
}

#[derive(Debug, Deserialize)]
pub struct ResubmitRequest {
    #[serde(default)]
    pub form_data: BTreeMap<String, Value>,
    /// Documents re-uploaded for this resubmission.
    #[serde(default)]
    pub documents: Vec<String>,
}

/// POST /applications/:id/resubmit — correct and resubmit a returned
/// application.
pub async fn resubmit(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(req): Json<ResubmitRequest>,
) -> Result<Json<Application>, ApiError> {
    let app = state
        .store
        .resubmit(&user, &id, req.form_data, req.documents)?;
    Ok(Json(app))
}
