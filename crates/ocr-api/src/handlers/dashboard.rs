//! GET /dashboard — status counts and recent submissions, role-scoped.

use axum::{extract::State, Extension, Json};

use ocr_store::DashboardSummary;
use ocr_types::User;

use crate::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Json<DashboardSummary> {
    Json(state.store.dashboard(&user))
}
