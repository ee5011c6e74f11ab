//! Append-only audit log records.

use serde::{Deserialize, Serialize};

/// One audit record: who did what to which target, when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub action: String,
    pub user_id: String,
    pub user_name: String,
    /// Target kind: "application", "template", "user", "event_type",
    /// or "system" for session events.
    pub target_type: String,
    pub target_id: String,
    pub timestamp: String,
    pub details: String,
}
