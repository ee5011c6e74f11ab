//! Application lifecycle and submission workflow.
//!
//! Two state machines live here:
//! - the application status lifecycle (`lifecycle`): which status
//!   transitions are legal, which review actions trigger them, and the
//!   guards that must pass before an application leaves `Draft`;
//! - the four-step submission wizard (`wizard`): a strictly linear
//!   select → form → docs → review flow that accumulates form state and
//!   only produces an application once the guards pass.
//!
//! Guard failures are reported as typed [`Blocker`]s rather than bare
//! strings so callers can render an actionable checklist.

pub mod blocker;
pub mod lifecycle;
pub mod wizard;

pub use blocker::{Blocker, BlockerType};
pub use lifecycle::{can_transition, guard_submission, ReviewAction, UnknownActionError};
pub use wizard::{CompletedSubmission, SubmissionWizard, WizardError, WizardStep};

use ocr_types::ApplicationStatus;

/// Errors from lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    /// Guards rejected the transition; the blockers say what is missing.
    #[error("transition blocked: {} blocker(s)", blockers.len())]
    GuardFailed { blockers: Vec<Blocker> },
}
