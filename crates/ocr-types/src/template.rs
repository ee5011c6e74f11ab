//! Document-generation templates.
//!
//! A template binds a placeholder list to one event type. No generation
//! engine exists in this service; templates are configuration only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub code: String,
    pub name: String,
    pub event_type_id: String,
    pub language: String,
    pub format: String,
    pub version: u32,
    pub created_by: String,
    pub created_date: String,
    pub status: TemplateStatus,
    /// Placeholder names the (external) renderer would resolve.
    pub placeholders: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    Active,
    Inactive,
}
