//! Application status transition table, review actions and guards.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ocr_types::{value_is_absent, ApplicationStatus, EventType, FieldValueError};

use crate::blocker::{Blocker, BlockerType};

/// Transition legality for the application lifecycle.
///
/// The chain is strictly linear on the happy path, with `Returned` looping
/// back to `Submitted` on resubmission. `Approved` and `Rejected` are
/// terminal.
pub fn can_transition(from: ApplicationStatus, to: ApplicationStatus) -> bool {
    use ApplicationStatus::*;
    matches!(
        (from, to),
        (Draft, Submitted)
            | (Submitted, UnderVerification)
            | (UnderVerification, Approved)
            | (UnderVerification, Rejected)
            | (UnderVerification, Returned)
            | (Returned, Submitted)
    )
}

/// Staff actions on an application under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    StartVerification,
    Approve,
    Return,
    Reject,
}

impl ReviewAction {
    /// Status this action moves the application to.
    pub fn target_status(&self) -> ApplicationStatus {
        match self {
            Self::StartVerification => ApplicationStatus::UnderVerification,
            Self::Approve => ApplicationStatus::Approved,
            Self::Return => ApplicationStatus::Returned,
            Self::Reject => ApplicationStatus::Rejected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartVerification => "start_verification",
            Self::Approve => "approve",
            Self::Return => "return",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for ReviewAction {
    type Err = UnknownActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start_verification" => Ok(Self::StartVerification),
            "approve" => Ok(Self::Approve),
            "return" => Ok(Self::Return),
            "reject" => Ok(Self::Reject),
            _ => Err(UnknownActionError(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown review action: {0}")]
pub struct UnknownActionError(pub String);

/// Evaluate the guards for leaving `Draft` (first submission or
/// resubmission after a return).
///
/// Checks, in schema order:
/// - every submitted form key belongs to the event type's schema,
/// - every mandatory field is present, and every present value passes its
///   field type check,
/// - every required document is present (`doc_present` closes over however
///   the caller tracks uploads).
///
/// Returns the full blocker list rather than failing fast, so the submitter
/// sees everything at once.
pub fn guard_submission(
    event_type: &EventType,
    form_data: &BTreeMap<String, Value>,
    doc_present: impl Fn(&str) -> bool,
) -> Vec<Blocker> {
    let mut blockers = Vec::new();

    for key in form_data.keys() {
        if event_type.field(key).is_none() {
            blockers.push(Blocker::new(
                BlockerType::FieldNotInSchema { field: key.clone() },
                format!("Field '{key}' is not part of {}", event_type.code),
            ));
        }
    }

    for field in &event_type.fields {
        let value = form_data.get(&field.name);
        let absent = value.map(value_is_absent).unwrap_or(true);
        if absent {
            if field.mandatory {
                blockers.push(Blocker::new(
                    BlockerType::MissingField {
                        field: field.name.clone(),
                    },
                    format!("Mandatory field '{}' is missing", field.label),
                ));
            }
            continue;
        }
        if let Some(value) = value {
            match field.check_value(value) {
                Ok(()) => {}
                // Absence was already handled above.
                Err(FieldValueError::Empty { .. }) => {}
                Err(err) => blockers.push(Blocker::new(
                    BlockerType::InvalidValue {
                        field: field.name.clone(),
                        reason: err.to_string(),
                    },
                    format!("Field '{}': {err}", field.label),
                )),
            }
        }
    }

    for doc in &event_type.required_docs {
        if !doc_present(doc) {
            blockers.push(Blocker::new(
                BlockerType::MissingDocument {
                    doc_type: doc.clone(),
                },
                format!("Required document '{doc}' has not been uploaded"),
            ));
        }
    }

    if !blockers.is_empty() {
        tracing::debug!(
            event_type = %event_type.code,
            blockers = blockers.len(),
            "submission guards failed"
        );
    }
    blockers
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocr_types::{EventField, EventTypeStatus, FieldType};
    use serde_json::json;

    fn share_transfer() -> EventType {
        EventType {
            id: "evt4".into(),
            code: "SHARE_TRANSFER".into(),
            name: "Share Transfer".into(),
            name_np: "शेयर हस्तान्तरण".into(),
            category: "capital".into(),
            status: EventTypeStatus::Active,
            required_docs: vec!["Transfer Deed".into(), "Board Approval".into()],
            fields: vec![
                EventField {
                    name: "transferorName".into(),
                    label: "Transferor Name".into(),
                    field_type: FieldType::Text,
                    mandatory: true,
                    options: None,
                },
                EventField {
                    name: "shareQuantity".into(),
                    label: "Share Quantity".into(),
                    field_type: FieldType::Number,
                    mandatory: true,
                    options: None,
                },
                EventField {
                    name: "note".into(),
                    label: "Note".into(),
                    field_type: FieldType::Textarea,
                    mandatory: false,
                    options: None,
                },
            ],
        }
    }

    #[test]
    fn transition_table_is_strictly_linear_with_return_loop() {
        use ApplicationStatus::*;
        assert!(can_transition(Draft, Submitted));
        assert!(can_transition(Submitted, UnderVerification));
        assert!(can_transition(UnderVerification, Approved));
        assert!(can_transition(UnderVerification, Returned));
        assert!(can_transition(Returned, Submitted));

        assert!(!can_transition(Draft, Approved));
        assert!(!can_transition(Submitted, Approved));
        assert!(!can_transition(Approved, Submitted));
        assert!(!can_transition(Rejected, Submitted));
        assert!(!can_transition(Submitted, Draft));
    }

    #[test]
    fn complete_submission_passes_guards() {
        let evt = share_transfer();
        let form: BTreeMap<_, _> = [
            ("transferorName".to_string(), json!("Hari Bahadur Thapa")),
            ("shareQuantity".to_string(), json!(5000)),
        ]
        .into();
        let blockers = guard_submission(&evt, &form, |_| true);
        assert!(blockers.is_empty(), "unexpected blockers: {blockers:?}");
    }

    #[test]
    fn missing_mandatory_field_and_document_are_both_reported() {
        let evt = share_transfer();
        let form: BTreeMap<_, _> =
            [("transferorName".to_string(), json!("Hari Bahadur Thapa"))].into();
        let blockers = guard_submission(&evt, &form, |d| d == "Board Approval");

        assert!(blockers.iter().any(|b| matches!(
            &b.blocker_type,
            BlockerType::MissingField { field } if field == "shareQuantity"
        )));
        assert!(blockers.iter().any(|b| matches!(
            &b.blocker_type,
            BlockerType::MissingDocument { doc_type } if doc_type == "Transfer Deed"
        )));
        assert_eq!(blockers.len(), 2);
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let evt = share_transfer();
        let form: BTreeMap<_, _> = [
            ("transferorName".to_string(), json!("  ")),
            ("shareQuantity".to_string(), json!(100)),
        ]
        .into();
        let blockers = guard_submission(&evt, &form, |_| true);
        assert!(blockers.iter().any(|b| matches!(
            &b.blocker_type,
            BlockerType::MissingField { field } if field == "transferorName"
        )));
    }

    #[test]
    fn unknown_key_and_bad_number_are_flagged() {
        let evt = share_transfer();
        let form: BTreeMap<_, _> = [
            ("transferorName".to_string(), json!("X")),
            ("shareQuantity".to_string(), json!("lots")),
            ("bogus".to_string(), json!(1)),
        ]
        .into();
        let blockers = guard_submission(&evt, &form, |_| true);
        assert!(blockers
            .iter()
            .any(|b| matches!(&b.blocker_type, BlockerType::FieldNotInSchema { field } if field == "bogus")));
        assert!(blockers
            .iter()
            .any(|b| matches!(&b.blocker_type, BlockerType::InvalidValue { field, .. } if field == "shareQuantity")));
    }

    #[test]
    fn optional_blank_field_is_not_a_blocker() {
        let evt = share_transfer();
        let form: BTreeMap<_, _> = [
            ("transferorName".to_string(), json!("X")),
            ("shareQuantity".to_string(), json!(1)),
            ("note".to_string(), json!("")),
        ]
        .into();
        assert!(guard_submission(&evt, &form, |_| true).is_empty());
    }

    #[test]
    fn review_action_targets() {
        assert_eq!(
            ReviewAction::Approve.target_status(),
            ApplicationStatus::Approved
        );
        assert_eq!(
            "start_verification".parse::<ReviewAction>().unwrap(),
            ReviewAction::StartVerification
        );
        assert!("escalate".parse::<ReviewAction>().is_err());
    }
}
