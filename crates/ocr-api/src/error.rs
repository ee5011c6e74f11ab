//! API error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use ocr_store::StoreError;
use ocr_workflow::{Blocker, WizardError, WorkflowError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("{what} not found: {id}")]
    NotFound { what: String, id: String },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid request: {0}")]
    BadRequest(String),

    /// Status transition not allowed from the application's current state.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Submission guards failed; the blockers carry the checklist.
    #[error("submission blocked by {} item(s)", blockers.len())]
    Blocked { blockers: Vec<Blocker> },
}

/// JSON error body, stable across all endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockers: Option<Vec<Blocker>>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::InvalidTransition(_) => StatusCode::CONFLICT,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Blocked { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound { .. } => "not_found",
            Self::Conflict(_) => "conflict",
            Self::BadRequest(_) => "bad_request",
            Self::InvalidTransition(_) => "invalid_transition",
            Self::Blocked { .. } => "submission_blocked",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let blockers = match &self {
            Self::Blocked { blockers } => Some(blockers.clone()),
            _ => None,
        };
        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
            blockers,
        };
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { what, id } => Self::NotFound {
                what: what.to_string(),
                id,
            },
            StoreError::InvalidCredentials => Self::Unauthenticated,
            StoreError::Forbidden(reason) => Self::Forbidden(reason),
            StoreError::Conflict(msg) => Self::Conflict(msg),
            StoreError::InvalidConfig(msg) => Self::BadRequest(msg),
            StoreError::Workflow(WorkflowError::InvalidTransition { from, to }) => {
                Self::InvalidTransition(format!("{from} -> {to}"))
            }
            StoreError::Workflow(WorkflowError::GuardFailed { blockers }) => {
                Self::Blocked { blockers }
            }
        }
    }
}

impl From<WizardError> for ApiError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::Blocked { blockers } => Self::Blocked { blockers },
            other => Self::BadRequest(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocr_types::ApplicationStatus;

    #[test]
    fn store_errors_map_to_http_statuses() {
        let cases = [
            (
                ApiError::from(StoreError::NotFound {
                    what: "application",
                    id: "app9".into(),
                }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(StoreError::InvalidCredentials),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::from(StoreError::Forbidden("nope".into())),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::from(StoreError::Workflow(WorkflowError::InvalidTransition {
                    from: ApplicationStatus::Approved,
                    to: ApplicationStatus::Submitted,
                })),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::from(StoreError::Workflow(WorkflowError::GuardFailed {
                    blockers: vec![],
                })),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status, "{err}");
        }
    }
}
