//! Application list filtering.

use serde::Deserialize;

use ocr_types::{Application, ApplicationStatus};

/// Filter for application listings: optional status equality plus optional
/// case-insensitive free text over application number and event name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationFilter {
    pub status: Option<ApplicationStatus>,
    pub search: Option<String>,
}

impl ApplicationFilter {
    pub fn matches(&self, app: &Application) -> bool {
        if let Some(status) = self.status {
            if app.status != status {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if needle.is_empty() {
                return true;
            }
            let in_number = app.application_number.to_lowercase().contains(&needle);
            let in_name = app.event_name.to_lowercase().contains(&needle);
            if !in_number && !in_name {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn app(number: &str, event: &str, status: ApplicationStatus) -> Application {
        Application {
            id: "x".into(),
            application_number: number.into(),
            company_id: "c1".into(),
            event_type_id: "evt1".into(),
            event_name: event.into(),
            submission_date: "2081-04-10".into(),
            submitted_by: "u1".into(),
            status,
            remarks: String::new(),
            version: 1,
            form_data: BTreeMap::new(),
            documents: vec![],
            history: vec![],
        }
    }

    #[test]
    fn status_filter_is_exact() {
        let f = ApplicationFilter {
            status: Some(ApplicationStatus::Returned),
            search: None,
        };
        assert!(f.matches(&app("APP-2081-0004", "Share Transfer", ApplicationStatus::Returned)));
        assert!(!f.matches(&app("APP-2081-0001", "Annual Return", ApplicationStatus::Approved)));
    }

    #[test]
    fn search_is_case_insensitive_over_number_and_name() {
        let f = ApplicationFilter {
            status: None,
            search: Some("annual".into()),
        };
        assert!(f.matches(&app("APP-2081-0001", "Annual Return Filing", ApplicationStatus::Draft)));

        let f = ApplicationFilter {
            status: None,
            search: Some("app-2081-0004".into()),
        };
        assert!(f.matches(&app("APP-2081-0004", "Share Transfer", ApplicationStatus::Returned)));
        assert!(!f.matches(&app("APP-2081-0001", "Annual Return", ApplicationStatus::Draft)));
    }

    #[test]
    fn both_criteria_must_hold() {
        let f = ApplicationFilter {
            status: Some(ApplicationStatus::Approved),
            search: Some("share".into()),
        };
        assert!(!f.matches(&app("APP-2081-0004", "Share Transfer", ApplicationStatus::Returned)));
        assert!(!f.matches(&app("APP-2081-0001", "Annual Return", ApplicationStatus::Approved)));
        assert!(f.matches(&app("APP-2081-0009", "Share Transfer", ApplicationStatus::Approved)));
    }
}
