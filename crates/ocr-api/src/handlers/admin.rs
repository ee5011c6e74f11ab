//! Admin configuration surfaces: event types, templates, users, audit.

use axum::{extract::State, Extension, Json};

use ocr_store::{NewEventType, NewUser, TemplateDraft};
use ocr_types::{AuditLog, EventType, Template, User};

use crate::error::ApiError;
use crate::AppState;

/// GET /admin/events — every event type, active or not.
pub async fn list_event_types(State(state): State<AppState>) -> Json<Vec<EventType>> {
    Json(state.store.event_types())
}

/// POST /admin/events — create or replace an event-type definition.
pub async fn upsert_event_type(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(def): Json<NewEventType>,
) -> Result<Json<EventType>, ApiError> {
    let evt = state.store.upsert_event_type(&user, def)?;
    Ok(Json(evt))
}

/// GET /admin/templates
pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<Template>> {
    Json(state.store.templates())
}

/// POST /admin/templates — create a template, or update one with a
/// version bump.
pub async fn save_template(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(draft): Json<TemplateDraft>,
) -> Result<Json<Template>, ApiError> {
    let tpl = state.store.save_template(&user, draft)?;
    Ok(Json(tpl))
}

/// GET /admin/users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.users())
}

/// POST /admin/users — create a portal account.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(new): Json<NewUser>,
) -> Result<Json<User>, ApiError> {
    let created = state.store.create_user(&user, new)?;
    Ok(Json(created))
}

/// GET /admin/audit — the full audit trail, newest last.
pub async fn audit_trail(State(state): State<AppState>) -> Json<Vec<AuditLog>> {
    Json(state.store.audit_logs())
}
