//! Applications: the mutable workflow unit of the registry.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// One company's submission of a specific event, carrying status, form
/// answers, documents and an append-only history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub application_number: String,
    pub company_id: String,
    pub event_type_id: String,
    /// Denormalized event-type name, frozen at submission time.
    pub event_name: String,
    pub submission_date: String,
    pub submitted_by: String,
    pub status: ApplicationStatus,
    pub remarks: String,
    pub version: u32,
    /// Form answers keyed by the owning event type's field names.
    pub form_data: BTreeMap<String, Value>,
    pub documents: Vec<ApplicationDocument>,
    pub history: Vec<HistoryEntry>,
}

/// Lifecycle status enumeration. Transition legality lives in
/// `ocr-workflow`; this type only names the states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderVerification,
    Approved,
    Rejected,
    Returned,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::UnderVerification => "under_verification",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Returned => "returned",
        }
    }

    /// History `action` label the registry uses for entry into this status.
    pub fn history_action(&self) -> &'static str {
        match self {
            Self::Draft => "Created",
            Self::Submitted => "Submitted",
            Self::UnderVerification => "Under Verification",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Returned => "Returned",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "under_verification" => Ok(Self::UnderVerification),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "returned" => Ok(Self::Returned),
            _ => Err(UnknownStatusError(s.to_string())),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown application status: {0}")]
pub struct UnknownStatusError(pub String);

/// Verification status of one submitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Uploaded,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub mandatory: bool,
    pub status: DocumentStatus,
    pub upload_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// One append-only history record: (action, actor, date, remarks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: String,
    pub by: String,
    pub date: String,
    pub remarks: String,
}

impl Application {
    /// Last history entry, if any. The store keeps the invariant that this
    /// entry's action matches the current status.
    pub fn last_history(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    pub fn document(&self, name: &str) -> Option<&ApplicationDocument> {
        self.documents.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for s in [
            ApplicationStatus::Draft,
            ApplicationStatus::Submitted,
            ApplicationStatus::UnderVerification,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
            ApplicationStatus::Returned,
        ] {
            assert_eq!(s.as_str().parse::<ApplicationStatus>().unwrap(), s);
        }
    }

    #[test]
    fn terminal_states() {
        assert!(ApplicationStatus::Approved.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(!ApplicationStatus::Returned.is_terminal());
        assert!(!ApplicationStatus::Draft.is_terminal());
    }

    #[test]
    fn history_action_labels_match_seed_vocabulary() {
        assert_eq!(ApplicationStatus::UnderVerification.history_action(), "Under Verification");
        assert_eq!(ApplicationStatus::Returned.history_action(), "Returned");
    }
}
