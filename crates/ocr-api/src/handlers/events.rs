//! Event submission: the wizard surface.
//!
//! `GET /events/new` lists the active event types a submitter can choose
//! from, grouped by category. `POST /events/new` takes the completed form
//! in one request and drives the [`SubmissionWizard`] through its steps
//! server-side, so every guard the wizard enforces applies to API clients
//! too. A blocked submission comes back as 422 with the blocker list.

use std::collections::BTreeMap;

use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use serde_json::Value;

use ocr_store::RegistryStore;
use ocr_types::{Application, EventType, User};
use ocr_workflow::SubmissionWizard;

use crate::error::ApiError;
use crate::AppState;

/// GET /events/new — active event types grouped by category.
pub async fn new_event_catalog(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Vec<EventType>>> {
    let mut grouped: BTreeMap<String, Vec<EventType>> = BTreeMap::new();
    for evt in state.store.active_event_types() {
        grouped.entry(evt.category.clone()).or_default().push(evt);
    }
    Json(grouped)
}

#[derive(Debug, Deserialize)]
pub struct SubmitEventRequest {
    pub event_type_id: String,
    #[serde(default)]
    pub form_data: BTreeMap<String, Value>,
    /// Names of required documents the client has uploaded.
    #[serde(default)]
    pub documents: Vec<String>,
}

/// POST /events/new — run the wizard to completion and create the
/// application.
pub async fn submit_event(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<SubmitEventRequest>,
) -> Result<Json<Application>, ApiError> {
    let completed = run_wizard(&state.store, &req)?;
    let app = state.store.submit(&user, completed)?;
    Ok(Json(app))
}

fn run_wizard(
    store: &RegistryStore,
    req: &SubmitEventRequest,
) -> Result<ocr_workflow::CompletedSubmission, ApiError> {
    let event_type = store.event_type(&req.event_type_id)?;
    let mut wizard = SubmissionWizard::new();
    wizard.select_event(event_type)?;
    for (name, value) in &req.form_data {
        wizard.set_field(name.clone(), value.clone())?;
    }
    wizard.next()?; // form -> docs
    for doc in &req.documents {
        wizard.mark_uploaded(doc)?;
    }
    wizard.next()?; // docs -> review
    Ok(wizard.finish()?)
}
