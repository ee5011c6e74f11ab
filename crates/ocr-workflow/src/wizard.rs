//! The four-step submission wizard.
//!
//! `select → form → docs → review`, strictly linear: each step is reachable
//! only from its immediate neighbor. All accumulated state (chosen event
//! type, form answers, uploaded-document flags) lives in one accumulator and
//! survives any sequence of back/forward moves. No file body is transferred;
//! marking a document "uploaded" toggles an in-memory flag.
//!
//! `finish()` is where enforcement happens: the draft-to-submitted guards
//! run against the accumulated state, and the wizard only yields a
//! [`CompletedSubmission`] when no blockers remain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ocr_types::EventType;

use crate::blocker::Blocker;
use crate::lifecycle::guard_submission;

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Select,
    Form,
    Docs,
    Review,
}

impl WizardStep {
    /// The immediate successor, if any.
    pub fn forward(self) -> Option<Self> {
        match self {
            Self::Select => Some(Self::Form),
            Self::Form => Some(Self::Docs),
            Self::Docs => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The immediate predecessor, if any.
    pub fn backward(self) -> Option<Self> {
        match self {
            Self::Select => None,
            Self::Form => Some(Self::Select),
            Self::Docs => Some(Self::Form),
            Self::Review => Some(Self::Docs),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("no event type selected yet")]
    NoEventSelected,

    #[error("event type {0} is not active")]
    InactiveEventType(String),

    #[error("event type can only be chosen at the select step")]
    AlreadySelected,

    #[error("'{0}' is not a required document of the selected event type")]
    UnknownDocument(String),

    #[error("cannot move forward from the review step")]
    AtFinalStep,

    #[error("submission is only possible from the review step")]
    NotAtReview,

    #[error("submission blocked by {} item(s)", blockers.len())]
    Blocked { blockers: Vec<Blocker> },
}

/// The wizard accumulator. Owns a clone of the chosen event-type schema so
/// later admin edits cannot shift the form under a submitter mid-flow.
#[derive(Debug, Clone)]
pub struct SubmissionWizard {
    step: WizardStep,
    event_type: Option<EventType>,
    form_data: BTreeMap<String, Value>,
    uploaded_docs: BTreeMap<String, bool>,
}

impl Default for SubmissionWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Select,
            event_type: None,
            form_data: BTreeMap::new(),
            uploaded_docs: BTreeMap::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn event_type(&self) -> Option<&EventType> {
        self.event_type.as_ref()
    }

    pub fn form_data(&self) -> &BTreeMap<String, Value> {
        &self.form_data
    }

    pub fn is_uploaded(&self, doc: &str) -> bool {
        self.uploaded_docs.get(doc).copied().unwrap_or(false)
    }

    /// Choose an event type and advance to the form step. Only legal at
    /// `Select`, and only for active event types.
    pub fn select_event(&mut self, event_type: EventType) -> Result<(), WizardError> {
        if self.step != WizardStep::Select {
            return Err(WizardError::AlreadySelected);
        }
        if !event_type.is_active() {
            return Err(WizardError::InactiveEventType(event_type.id));
        }
        self.event_type = Some(event_type);
        self.step = WizardStep::Form;
        Ok(())
    }

    /// Record a form value. Values are retained for the wizard's lifetime,
    /// including across back-navigation.
    pub fn set_field(
        &mut self,
        name: impl Into<String>,
        value: Value,
    ) -> Result<(), WizardError> {
        if self.event_type.is_none() {
            return Err(WizardError::NoEventSelected);
        }
        self.form_data.insert(name.into(), value);
        Ok(())
    }

    /// Mark one required document as uploaded.
    pub fn mark_uploaded(&mut self, doc: &str) -> Result<(), WizardError> {
        let event_type = self.event_type.as_ref().ok_or(WizardError::NoEventSelected)?;
        if !event_type.required_docs.iter().any(|d| d == doc) {
            return Err(WizardError::UnknownDocument(doc.to_string()));
        }
        self.uploaded_docs.insert(doc.to_string(), true);
        Ok(())
    }

    /// Advance one step. Moving out of `Select` goes through
    /// [`select_event`](Self::select_event); `Form → Docs` and
    /// `Docs → Review` are unconditional.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Select => Err(WizardError::NoEventSelected),
            WizardStep::Review => Err(WizardError::AtFinalStep),
            step => {
                // forward() is total for Form and Docs
                self.step = step.forward().ok_or(WizardError::AtFinalStep)?;
                Ok(self.step)
            }
        }
    }

    /// Go back one step, discarding nothing.
    pub fn back(&mut self) -> Option<WizardStep> {
        let prev = self.step.backward()?;
        self.step = prev;
        Some(self.step)
    }

    /// Run the submission guards and, if clean, yield the completed
    /// submission for the store to turn into a real application.
    pub fn finish(self) -> Result<CompletedSubmission, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotAtReview);
        }
        let event_type = self.event_type.ok_or(WizardError::NoEventSelected)?;
        let blockers = guard_submission(&event_type, &self.form_data, |doc| {
            self.uploaded_docs.get(doc).copied().unwrap_or(false)
        });
        if !blockers.is_empty() {
            return Err(WizardError::Blocked { blockers });
        }
        Ok(CompletedSubmission {
            event_type,
            form_data: self.form_data,
            uploaded_docs: self.uploaded_docs.into_keys().collect(),
        })
    }
}

/// A guard-clean submission, ready to become an application.
#[derive(Debug, Clone)]
pub struct CompletedSubmission {
    pub event_type: EventType,
    pub form_data: BTreeMap<String, Value>,
    /// Document names marked uploaded, in checklist order.
    pub uploaded_docs: Vec<String>,
}
