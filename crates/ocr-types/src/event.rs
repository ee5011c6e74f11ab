//! Event types: the admin-authored form schemas that drive submissions.
//!
//! An event type is a configuration entity. Its ordered `fields` list is the
//! schema rendered by the submission wizard, and its `required_docs` list is
//! the document checklist. Authored by admins, immutable at runtime for
//! everyone else.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// A configurable kind of regulatory filing (annual return, director
/// appointment, capital change, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventType {
    pub id: String,
    pub code: String,
    pub name: String,
    pub name_np: String,
    pub category: String,
    pub status: EventTypeStatus,
    pub required_docs: Vec<String>,
    pub fields: Vec<EventField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTypeStatus {
    Active,
    Inactive,
}

/// One typed form field in an event-type schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub mandatory: bool,
    /// Option set, present for `Select` fields only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Tagged field-type variants; each maps to one rendered input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Textarea,
    Select,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }
}

impl FromStr for FieldType {
    type Err = FieldValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "textarea" => Ok(Self::Textarea),
            "select" => Ok(Self::Select),
            _ => Err(FieldValueError::UnknownFieldType(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FieldValueError {
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),
    #[error("field '{field}' expects a number")]
    NumberExpected { field: String },
    #[error("'{value}' is not a valid option for field '{field}'")]
    InvalidOption { field: String, value: String },
    #[error("field '{field}' is empty")]
    Empty { field: String },
}

impl EventField {
    /// Check a submitted value against this field's type.
    ///
    /// Empty strings (and JSON null) count as absent; whether absence is an
    /// error depends on `mandatory` and is decided by the caller.
    pub fn check_value(&self, value: &Value) -> Result<(), FieldValueError> {
        if value_is_absent(value) {
            return Err(FieldValueError::Empty {
                field: self.name.clone(),
            });
        }
        match self.field_type {
            FieldType::Number => {
                let ok = match value {
                    Value::Number(_) => true,
                    Value::String(s) => s.trim().parse::<f64>().is_ok(),
                    _ => false,
                };
                if !ok {
                    return Err(FieldValueError::NumberExpected {
                        field: self.name.clone(),
                    });
                }
            }
            FieldType::Select => {
                let submitted = value.as_str().unwrap_or_default();
                let allowed = self
                    .options
                    .as_ref()
                    .map(|opts| opts.iter().any(|o| o == submitted))
                    .unwrap_or(false);
                if !allowed {
                    return Err(FieldValueError::InvalidOption {
                        field: self.name.clone(),
                        value: submitted.to_string(),
                    });
                }
            }
            // Text, textarea and date values are accepted as-is; BS date
            // strings have no machine-checkable calendar here.
            FieldType::Text | FieldType::Textarea | FieldType::Date => {}
        }
        Ok(())
    }
}

/// True when a submitted form value should be treated as "not provided".
pub fn value_is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

impl EventType {
    pub fn is_active(&self) -> bool {
        self.status == EventTypeStatus::Active
    }

    pub fn field(&self, name: &str) -> Option<&EventField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn select_field() -> EventField {
        EventField {
            name: "designation".into(),
            label: "Designation".into(),
            field_type: FieldType::Select,
            mandatory: true,
            options: Some(vec!["Director".into(), "Chairperson".into()]),
        }
    }

    #[test]
    fn select_rejects_values_outside_option_set() {
        let f = select_field();
        assert!(f.check_value(&json!("Director")).is_ok());
        assert_eq!(
            f.check_value(&json!("Peon")),
            Err(FieldValueError::InvalidOption {
                field: "designation".into(),
                value: "Peon".into()
            })
        );
    }

    #[test]
    fn number_accepts_numeric_strings() {
        let f = EventField {
            name: "shareQuantity".into(),
            label: "Share Quantity".into(),
            field_type: FieldType::Number,
            mandatory: true,
            options: None,
        };
        assert!(f.check_value(&json!(5000)).is_ok());
        assert!(f.check_value(&json!("5000")).is_ok());
        assert!(f.check_value(&json!("five")).is_err());
    }

    #[test]
    fn blank_values_are_absent() {
        assert!(value_is_absent(&json!("")));
        assert!(value_is_absent(&json!("   ")));
        assert!(value_is_absent(&Value::Null));
        assert!(!value_is_absent(&json!(0)));
    }
}
