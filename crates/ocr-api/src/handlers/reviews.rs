//! Staff verification queue and review actions.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use ocr_types::{Application, User};
use ocr_workflow::ReviewAction;

use crate::error::ApiError;
use crate::AppState;

/// GET /reviews — applications awaiting verification.
pub async fn queue(State(state): State<AppState>) -> Json<Vec<Application>> {
    Json(state.store.review_queue())
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub action: ReviewAction,
    #[serde(default)]
    pub remarks: String,
}

/// POST /reviews/:id/action — apply a review action. `return` and
/// `reject` should carry remarks; they reach the applicant.
pub async fn apply_action(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<Application>, ApiError> {
    let app = state.store.review(&user, &id, req.action, &req.remarks)?;
    Ok(Json(app))
}
