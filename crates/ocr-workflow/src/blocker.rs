//! Typed blockers preventing a lifecycle transition.

use serde::{Deserialize, Serialize};

/// One reason an application cannot advance, with a human-readable
/// description for the submitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blocker {
    #[serde(flatten)]
    pub blocker_type: BlockerType,
    pub description: String,
}

impl Blocker {
    pub fn new(blocker_type: BlockerType, description: impl Into<String>) -> Self {
        Self {
            blocker_type,
            description: description.into(),
        }
    }
}

/// Blocker variants with their specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BlockerType {
    /// Mandatory form field is missing or empty.
    MissingField { field: String },

    /// Submitted field name is not part of the event type's schema.
    FieldNotInSchema { field: String },

    /// Submitted value failed the field's type check.
    InvalidValue { field: String, reason: String },

    /// Required document has not been uploaded.
    MissingDocument { doc_type: String },
}
