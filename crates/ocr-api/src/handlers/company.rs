//! GET /company — the caller's company profile.

use axum::{extract::State, Extension, Json};

use ocr_types::{Company, User};

use crate::error::ApiError;
use crate::AppState;

pub async fn get_company(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Company>, ApiError> {
    let company = state.store.company_for(&user)?;
    Ok(Json(company))
}
