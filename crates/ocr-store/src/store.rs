//! The registry store: entity collections, queries and mutation paths.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use ocr_types::{
    Application, ApplicationDocument, ApplicationStatus, AuditLog, Company, DocumentStatus,
    EventField, EventType, EventTypeStatus, FieldType, HistoryEntry, Template, TemplateStatus,
    User, UserRole, UserStatus,
};
use ocr_workflow::{can_transition, guard_submission, CompletedSubmission, ReviewAction, WorkflowError};

use crate::clock::Clock;
use crate::filter::ApplicationFilter;
use crate::seed::{self, SeedData};
use crate::session::{Session, SessionStore};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    /// Login failed: no active user with that email.
    #[error("invalid email or inactive account")]
    InvalidCredentials,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

type StoreResult<T> = Result<T, StoreError>;

struct Inner {
    users: Vec<User>,
    companies: Vec<Company>,
    event_types: Vec<EventType>,
    applications: Vec<Application>,
    templates: Vec<Template>,
    audit_logs: Vec<AuditLog>,
    next_app_seq: u32,
    next_audit_seq: u32,
}

/// Process-wide registry state. All reads and writes go through one
/// `RwLock`; the collections are small enough that linear scans are fine.
pub struct RegistryStore {
    clock: Arc<dyn Clock>,
    sessions: SessionStore,
    inner: RwLock<Inner>,
}

impl RegistryStore {
    /// Store pre-loaded with the seed fixture.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        Self::with_data(seed::fixture(), clock)
    }

    pub fn with_data(data: SeedData, clock: Arc<dyn Clock>) -> Self {
        let next_app_seq = data.applications.len() as u32 + 1;
        let next_audit_seq = data.audit_logs.len() as u32 + 1;
        Self {
            clock,
            sessions: SessionStore::new(),
            inner: RwLock::new(Inner {
                users: data.users,
                companies: data.companies,
                event_types: data.event_types,
                applications: data.applications,
                templates: data.templates,
                audit_logs: data.audit_logs,
                next_app_seq,
                next_audit_seq,
            }),
        }
    }

    // ── sessions ─────────────────────────────────────────────────

    /// Log in by email. Succeeds iff an active user with exactly this email
    /// exists; the password is accepted but never checked (the portal is
    /// not an authentication boundary). Email matching is case-sensitive.
    pub fn login(&self, email: &str, _password: &str) -> StoreResult<Session> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let user = inner
            .users
            .iter()
            .find(|u| u.email == email && u.status == UserStatus::Active)
            .cloned();
        let Some(user) = user else {
            warn!(email, "login rejected");
            return Err(StoreError::InvalidCredentials);
        };
        let token = self.sessions.issue(&user.id);
        append_audit(
            &mut inner,
            &self.clock,
            &user,
            "User Login",
            "system",
            "",
            "User logged in",
        );
        info!(user = %user.id, role = %user.role, "login");
        Ok(Session { token, user })
    }

    /// Drop a session token unconditionally.
    pub fn logout(&self, token: &Uuid) {
        self.sessions.revoke(token);
    }

    /// Resolve a session token to its user.
    pub fn current_user(&self, token: &Uuid) -> Option<User> {
        let user_id = self.sessions.user_id(token)?;
        let inner = self.inner.read().expect("store lock poisoned");
        inner.users.iter().find(|u| u.id == user_id).cloned()
    }

    // ── read projections ─────────────────────────────────────────

    pub fn users(&self) -> Vec<User> {
        self.inner.read().expect("store lock poisoned").users.clone()
    }

    pub fn event_types(&self) -> Vec<EventType> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .event_types
            .clone()
    }

    pub fn active_event_types(&self) -> Vec<EventType> {
        self.event_types()
            .into_iter()
            .filter(|e| e.is_active())
            .collect()
    }

    pub fn event_type(&self, id: &str) -> StoreResult<EventType> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .event_types
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                what: "event type",
                id: id.to_string(),
            })
    }

    pub fn templates(&self) -> Vec<Template> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .templates
            .clone()
    }

    pub fn audit_logs(&self) -> Vec<AuditLog> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .audit_logs
            .clone()
    }

    pub fn company(&self, id: &str) -> StoreResult<Company> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .companies
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                what: "company",
                id: id.to_string(),
            })
    }

    /// The company a user is affiliated with.
    pub fn company_for(&self, user: &User) -> StoreResult<Company> {
        let company_id = user.company_id.as_deref().ok_or(StoreError::NotFound {
            what: "company affiliation",
            id: user.id.clone(),
        })?;
        self.company(company_id)
    }

    /// Applications visible to an identity: company users see their own
    /// submissions, staff and admins see everything.
    pub fn applications_for(&self, user: &User) -> Vec<Application> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .applications
            .iter()
            .filter(|a| match user.role {
                UserRole::User => a.submitted_by == user.id,
                UserRole::Staff | UserRole::Admin => true,
            })
            .cloned()
            .collect()
    }

    pub fn list_applications(&self, user: &User, filter: &ApplicationFilter) -> Vec<Application> {
        self.applications_for(user)
            .into_iter()
            .filter(|a| filter.matches(a))
            .collect()
    }

    /// One application, subject to the same visibility rule. Applications
    /// outside a user's visibility read as not found.
    pub fn application(&self, user: &User, id: &str) -> StoreResult<Application> {
        self.applications_for(user)
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound {
                what: "application",
                id: id.to_string(),
            })
    }

    /// The staff review queue: everything awaiting verification.
    pub fn review_queue(&self) -> Vec<Application> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .applications
            .iter()
            .filter(|a| {
                matches!(
                    a.status,
                    ApplicationStatus::Submitted | ApplicationStatus::UnderVerification
                )
            })
            .cloned()
            .collect()
    }

    /// Status counts plus the most recent submissions, over the caller's
    /// visible set.
    pub fn dashboard(&self, user: &User) -> DashboardSummary {
        let mut apps = self.applications_for(user);
        let count = |s| apps.iter().filter(|a| a.status == s).count();
        let mut out = DashboardSummary {
            total: apps.len(),
            draft: count(ApplicationStatus::Draft),
            submitted: count(ApplicationStatus::Submitted),
            under_verification: count(ApplicationStatus::UnderVerification),
            approved: count(ApplicationStatus::Approved),
            rejected: count(ApplicationStatus::Rejected),
            returned: count(ApplicationStatus::Returned),
            recent: Vec::new(),
        };
        // zero-padded BS dates sort lexicographically
        apps.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
        apps.truncate(5);
        out.recent = apps;
        out
    }

    // ── mutations ────────────────────────────────────────────────

    /// Turn a guard-clean wizard submission into a real application.
    pub fn submit(&self, user: &User, submission: CompletedSubmission) -> StoreResult<Application> {
        if user.role != UserRole::User {
            return Err(StoreError::Forbidden(
                "only company users can submit events".into(),
            ));
        }
        let company = self.company_for(user)?;
        let today = self.clock.today();
        let fiscal_year = fiscal_year(&today);

        let mut inner = self.inner.write().expect("store lock poisoned");
        let seq = inner.next_app_seq;
        inner.next_app_seq += 1;

        let event_type = submission.event_type;
        let documents = submission
            .uploaded_docs
            .iter()
            .map(|name| ApplicationDocument {
                id: format!("doc-{}", Uuid::new_v4().simple()),
                name: name.clone(),
                doc_type: classify_doc_type(name).to_string(),
                mandatory: true,
                status: DocumentStatus::Uploaded,
                upload_date: today.clone(),
                file_path: None,
            })
            .collect();

        let app = Application {
            id: format!("app-{}", Uuid::new_v4().simple()),
            application_number: format!("APP-{fiscal_year}-{seq:04}"),
            company_id: company.id,
            event_type_id: event_type.id.clone(),
            event_name: event_type.name.clone(),
            submission_date: today.clone(),
            submitted_by: user.id.clone(),
            status: ApplicationStatus::Submitted,
            remarks: String::new(),
            version: 1,
            form_data: submission.form_data,
            documents,
            history: vec![
                HistoryEntry {
                    action: "Created".into(),
                    by: user.name.clone(),
                    date: today.clone(),
                    remarks: "Draft created".into(),
                },
                HistoryEntry {
                    action: "Submitted".into(),
                    by: user.name.clone(),
                    date: today,
                    remarks: "Submitted for verification".into(),
                },
            ],
        };

        inner.applications.push(app.clone());
        append_audit(
            &mut inner,
            &self.clock,
            user,
            "Application Submitted",
            "application",
            &app.id,
            &format!("{} submitted", app.event_name),
        );
        info!(application = %app.application_number, event = %app.event_type_id, "application submitted");
        Ok(app)
    }

    /// Resubmit a returned application with corrected form data and
    /// re-uploaded documents. Bumps the version.
    pub fn resubmit(
        &self,
        user: &User,
        app_id: &str,
        form_data: BTreeMap<String, Value>,
        uploaded_docs: Vec<String>,
    ) -> StoreResult<Application> {
        // visibility check doubles as the ownership check
        let app = self.application(user, app_id)?;
        if !can_transition(app.status, ApplicationStatus::Submitted) {
            return Err(WorkflowError::InvalidTransition {
                from: app.status,
                to: ApplicationStatus::Submitted,
            }
            .into());
        }
        let event_type = self.event_type(&app.event_type_id)?;

        // a document counts as present if re-uploaded now or already on
        // file in a non-rejected state
        let blockers = guard_submission(&event_type, &form_data, |name| {
            uploaded_docs.iter().any(|d| d == name)
                || app
                    .document(name)
                    .map(|d| d.status != DocumentStatus::Rejected)
                    .unwrap_or(false)
        });
        if !blockers.is_empty() {
            return Err(WorkflowError::GuardFailed { blockers }.into());
        }

        let today = self.clock.today();
        let mut inner = self.inner.write().expect("store lock poisoned");
        let stored = inner
            .applications
            .iter_mut()
            .find(|a| a.id == app_id)
            .ok_or(StoreError::NotFound {
                what: "application",
                id: app_id.to_string(),
            })?;

        stored.form_data = form_data;
        stored.status = ApplicationStatus::Submitted;
        stored.version += 1;
        stored.remarks = String::new();
        for name in &uploaded_docs {
            match stored.documents.iter_mut().find(|d| &d.name == name) {
                Some(doc) => {
                    doc.status = DocumentStatus::Uploaded;
                    doc.upload_date = today.clone();
                }
                None => stored.documents.push(ApplicationDocument {
                    id: format!("doc-{}", Uuid::new_v4().simple()),
                    name: name.clone(),
                    doc_type: classify_doc_type(name).to_string(),
                    mandatory: true,
                    status: DocumentStatus::Uploaded,
                    upload_date: today.clone(),
                    file_path: None,
                }),
            }
        }
        stored.history.push(HistoryEntry {
            action: "Submitted".into(),
            by: user.name.clone(),
            date: today,
            remarks: "Resubmitted after return".into(),
        });
        let updated = stored.clone();

        append_audit(
            &mut inner,
            &self.clock,
            user,
            "Application Resubmitted",
            "application",
            app_id,
            &format!("{} resubmitted (version {})", updated.event_name, updated.version),
        );
        info!(application = %updated.application_number, version = updated.version, "resubmitted");
        Ok(updated)
    }

    /// Apply a staff review action: validated status transition, history
    /// append, audit entry. `Return`/`Reject` record the remarks on the
    /// application; `Approve` marks every document verified.
    pub fn review(
        &self,
        staff: &User,
        app_id: &str,
        action: ReviewAction,
        remarks: &str,
    ) -> StoreResult<Application> {
        if staff.role != UserRole::Staff {
            return Err(StoreError::Forbidden("only staff can review".into()));
        }
        let today = self.clock.today();
        let mut inner = self.inner.write().expect("store lock poisoned");
        let app = inner
            .applications
            .iter_mut()
            .find(|a| a.id == app_id)
            .ok_or(StoreError::NotFound {
                what: "application",
                id: app_id.to_string(),
            })?;

        let target = action.target_status();
        if !can_transition(app.status, target) {
            return Err(WorkflowError::InvalidTransition {
                from: app.status,
                to: target,
            }
            .into());
        }

        app.status = target;
        match action {
            ReviewAction::Approve => {
                for doc in &mut app.documents {
                    doc.status = DocumentStatus::Verified;
                }
                app.remarks = if remarks.is_empty() {
                    "All documents verified".into()
                } else {
                    remarks.into()
                };
            }
            ReviewAction::Return | ReviewAction::Reject => {
                app.remarks = remarks.to_string();
            }
            ReviewAction::StartVerification => {}
        }
        let default_remark = match action {
            ReviewAction::StartVerification => "Reviewing documents",
            ReviewAction::Approve => "All documents verified successfully",
            ReviewAction::Return => "Returned for correction",
            ReviewAction::Reject => "Application rejected",
        };
        app.history.push(HistoryEntry {
            action: target.history_action().into(),
            by: staff.name.clone(),
            date: today,
            remarks: if remarks.is_empty() {
                default_remark.into()
            } else {
                remarks.into()
            },
        });
        let updated = app.clone();

        append_audit(
            &mut inner,
            &self.clock,
            staff,
            &format!("Application {}", target.history_action()),
            "application",
            app_id,
            &format!("{} {}", updated.event_name, target.as_str()),
        );
        info!(application = %updated.application_number, action = action.as_str(), "review action applied");
        Ok(updated)
    }

    /// Admin: create a portal account. Emails must be unique.
    pub fn create_user(&self, admin: &User, new: NewUser) -> StoreResult<User> {
        if admin.role != UserRole::Admin {
            return Err(StoreError::Forbidden("only admins can create users".into()));
        }
        let mut inner = self.inner.write().expect("store lock poisoned");
        if inner.users.iter().any(|u| u.email == new.email) {
            return Err(StoreError::Conflict(format!(
                "a user with email {} already exists",
                new.email
            )));
        }
        if let Some(company_id) = &new.company_id {
            if !inner.companies.iter().any(|c| &c.id == company_id) {
                return Err(StoreError::NotFound {
                    what: "company",
                    id: company_id.clone(),
                });
            }
        }
        let user = User {
            id: format!("u-{}", Uuid::new_v4().simple()),
            name: new.name,
            email: new.email,
            role: new.role,
            company_id: new.company_id,
            status: UserStatus::Active,
        };
        inner.users.push(user.clone());
        append_audit(
            &mut inner,
            &self.clock,
            admin,
            "User Created",
            "user",
            &user.id,
            &format!("{} ({}) created", user.name, user.role),
        );
        info!(user = %user.id, role = %user.role, "user created");
        Ok(user)
    }

    /// Admin: create or replace an event-type definition.
    pub fn upsert_event_type(&self, admin: &User, def: NewEventType) -> StoreResult<EventType> {
        if admin.role != UserRole::Admin {
            return Err(StoreError::Forbidden(
                "only admins can configure event types".into(),
            ));
        }
        for f in &def.fields {
            let has_options = f.options.as_ref().map(|o| !o.is_empty()).unwrap_or(false);
            if f.field_type == FieldType::Select && !has_options {
                return Err(StoreError::InvalidConfig(format!(
                    "select field '{}' needs an option set",
                    f.name
                )));
            }
        }

        let mut inner = self.inner.write().expect("store lock poisoned");
        match def.id {
            Some(id) => {
                let slot = inner
                    .event_types
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or(StoreError::NotFound {
                        what: "event type",
                        id: id.clone(),
                    })?;
                *slot = EventType {
                    id: id.clone(),
                    code: def.code,
                    name: def.name,
                    name_np: def.name_np,
                    category: def.category,
                    status: def.status,
                    required_docs: def.required_docs,
                    fields: def.fields,
                };
                let updated = slot.clone();
                append_audit(
                    &mut inner,
                    &self.clock,
                    admin,
                    "Event Type Updated",
                    "event_type",
                    &id,
                    &format!("{} updated", updated.code),
                );
                Ok(updated)
            }
            None => {
                if inner.event_types.iter().any(|e| e.code == def.code) {
                    return Err(StoreError::Conflict(format!(
                        "event type code {} already exists",
                        def.code
                    )));
                }
                let created = EventType {
                    id: format!("evt-{}", Uuid::new_v4().simple()),
                    code: def.code,
                    name: def.name,
                    name_np: def.name_np,
                    category: def.category,
                    status: def.status,
                    required_docs: def.required_docs,
                    fields: def.fields,
                };
                inner.event_types.push(created.clone());
                append_audit(
                    &mut inner,
                    &self.clock,
                    admin,
                    "Event Type Created",
                    "event_type",
                    &created.id,
                    &format!("{} created", created.code),
                );
                Ok(created)
            }
        }
    }

    /// Admin: create a template, or update one (version bump).
    pub fn save_template(&self, admin: &User, draft: TemplateDraft) -> StoreResult<Template> {
        if admin.role != UserRole::Admin {
            return Err(StoreError::Forbidden(
                "only admins can manage templates".into(),
            ));
        }
        // bind check before taking the write path
        self.event_type(&draft.event_type_id)?;

        let today = self.clock.today();
        let mut inner = self.inner.write().expect("store lock poisoned");
        match draft.id {
            Some(id) => {
                let slot = inner
                    .templates
                    .iter_mut()
                    .find(|t| t.id == id)
                    .ok_or(StoreError::NotFound {
                        what: "template",
                        id: id.clone(),
                    })?;
                slot.code = draft.code;
                slot.name = draft.name;
                slot.event_type_id = draft.event_type_id;
                slot.language = draft.language;
                slot.format = draft.format;
                slot.status = draft.status;
                slot.placeholders = draft.placeholders;
                slot.version += 1;
                let updated = slot.clone();
                append_audit(
                    &mut inner,
                    &self.clock,
                    admin,
                    "Template Updated",
                    "template",
                    &id,
                    &format!("{} updated to version {}", updated.name, updated.version),
                );
                Ok(updated)
            }
            None => {
                let created = Template {
                    id: format!("t-{}", Uuid::new_v4().simple()),
                    code: draft.code,
                    name: draft.name,
                    event_type_id: draft.event_type_id,
                    language: draft.language,
                    format: draft.format,
                    version: 1,
                    created_by: admin.id.clone(),
                    created_date: today,
                    status: draft.status,
                    placeholders: draft.placeholders,
                };
                inner.templates.push(created.clone());
                append_audit(
                    &mut inner,
                    &self.clock,
                    admin,
                    "Template Created",
                    "template",
                    &created.id,
                    &format!("{} created", created.name),
                );
                Ok(created)
            }
        }
    }
}

/// `"2081-05-15"` → `"2081"`. Falls back to the raw string for malformed
/// dates rather than failing a submission over a stamp.
fn fiscal_year(today: &str) -> &str {
    today.split('-').next().unwrap_or(today)
}

/// Document-type tag for newly uploaded documents, using the seed data's
/// vocabulary.
fn classify_doc_type(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    if lower.contains("resolution") || lower.contains("minutes") {
        "Resolution"
    } else if lower.contains("statement") || lower.contains("report") {
        "Report"
    } else {
        "Certificate"
    }
}

fn append_audit(
    inner: &mut Inner,
    clock: &Arc<dyn Clock>,
    actor: &User,
    action: &str,
    target_type: &str,
    target_id: &str,
    details: &str,
) {
    let seq = inner.next_audit_seq;
    inner.next_audit_seq += 1;
    inner.audit_logs.push(AuditLog {
        id: format!("al{seq}"),
        action: action.to_string(),
        user_id: actor.id.clone(),
        user_name: actor.name.clone(),
        target_type: target_type.to_string(),
        target_id: target_id.to_string(),
        timestamp: clock.now(),
        details: details.to_string(),
    });
}

/// Dashboard projection: status counts and most recent submissions over
/// the caller's visible applications.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub draft: usize,
    pub submitted: usize,
    pub under_verification: usize,
    pub approved: usize,
    pub rejected: usize,
    pub returned: usize,
    pub recent: Vec<Application>,
}

/// Admin payload for account creation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub company_id: Option<String>,
}

/// Admin payload for event-type configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEventType {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub name_np: String,
    pub category: String,
    pub status: EventTypeStatus,
    pub required_docs: Vec<String>,
    pub fields: Vec<EventField>,
}

/// Admin payload for template create/update.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDraft {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub event_type_id: String,
    pub language: String,
    pub format: String,
    pub status: TemplateStatus,
    pub placeholders: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use ocr_workflow::SubmissionWizard;
    use serde_json::json;

    fn store() -> RegistryStore {
        RegistryStore::seeded(Arc::new(FixedClock::default()))
    }

    fn login(store: &RegistryStore, email: &str) -> Session {
        store.login(email, "whatever").unwrap()
    }

    #[test]
    fn login_succeeds_for_active_user_with_any_password() {
        let store = store();
        let session = store.login("ram@company.com", "any-password-at-all").unwrap();
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.user.role, UserRole::User);
        assert!(store.current_user(&session.token).is_some());
    }

    #[test]
    fn login_fails_for_unknown_email() {
        let store = store();
        assert!(matches!(
            store.login("unknown@x.com", "pw"),
            Err(StoreError::InvalidCredentials)
        ));
    }

    #[test]
    fn login_email_match_is_case_sensitive() {
        let store = store();
        assert!(matches!(
            store.login("Ram@Company.com", "pw"),
            Err(StoreError::InvalidCredentials)
        ));
    }

    #[test]
    fn login_fails_for_inactive_user() {
        let mut data = seed::fixture();
        data.users[0].status = UserStatus::Inactive;
        let store = RegistryStore::with_data(data, Arc::new(FixedClock::default()));
        assert!(matches!(
            store.login("ram@company.com", "pw"),
            Err(StoreError::InvalidCredentials)
        ));
    }

    #[test]
    fn login_appends_audit_entry() {
        let store = store();
        let before = store.audit_logs().len();
        login(&store, "sita@company.com");
        let logs = store.audit_logs();
        assert_eq!(logs.len(), before + 1);
        let last = logs.last().unwrap();
        assert_eq!(last.action, "User Login");
        assert_eq!(last.user_id, "u2");
    }

    #[test]
    fn logout_clears_session_unconditionally() {
        let store = store();
        let session = login(&store, "ram@company.com");
        store.logout(&session.token);
        assert!(store.current_user(&session.token).is_none());
        store.logout(&session.token); // no-op
    }

    #[test]
    fn company_user_sees_only_own_submissions() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        let apps = store.applications_for(&ram);
        assert_eq!(apps.len(), 3);
        assert!(apps.iter().all(|a| a.submitted_by == "u1"));
    }

    #[test]
    fn staff_sees_everything() {
        let store = store();
        let krishna = login(&store, "krishna@staff.gov").user;
        assert_eq!(store.applications_for(&krishna).len(), 5);
    }

    #[test]
    fn application_outside_visibility_reads_as_not_found() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        // app3 belongs to u2
        assert!(matches!(
            store.application(&ram, "app3"),
            Err(StoreError::NotFound { .. })
        ));
        assert!(store.application(&ram, "app4").is_ok());
    }

    #[test]
    fn app4_detail_matches_the_returned_scenario() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        let app = store.application(&ram, "app4").unwrap();
        assert_eq!(app.status, ApplicationStatus::Returned);
        assert_eq!(app.history.len(), 4);
        let last = app.history.last().unwrap();
        assert_eq!(last.action, "Returned");
        assert_eq!(last.remarks, "Transfer deed signature missing");
    }

    #[test]
    fn review_queue_holds_pending_work() {
        let store = store();
        let ids: Vec<_> = store.review_queue().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["app2", "app3"]);
    }

    #[test]
    fn dashboard_counts_by_status() {
        let store = store();
        let sita = login(&store, "sita@company.com").user;
        let dash = store.dashboard(&sita);
        assert_eq!(dash.total, 2);
        assert_eq!(dash.draft, 1);
        assert_eq!(dash.under_verification, 1);
        assert_eq!(dash.approved, 0);
    }

    fn complete_wizard(store: &RegistryStore) -> CompletedSubmission {
        let evt = store.event_type("evt5").unwrap();
        let mut w = SubmissionWizard::new();
        w.select_event(evt).unwrap();
        w.set_field("previousAddress", json!("Kathmandu-10")).unwrap();
        w.set_field("newAddress", json!("Lalitpur-3")).unwrap();
        w.set_field("effectiveDate", json!("2081-06-01")).unwrap();
        w.set_field("resolutionRef", json!("RES-081-09")).unwrap();
        w.next().unwrap();
        w.mark_uploaded("Board Resolution").unwrap();
        w.mark_uploaded("New Address Proof").unwrap();
        w.next().unwrap();
        w.finish().unwrap()
    }

    #[test]
    fn submit_creates_a_real_application() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        let app = store.submit(&ram, complete_wizard(&store)).unwrap();

        assert_eq!(app.application_number, "APP-2081-0006");
        assert_eq!(app.status, ApplicationStatus::Submitted);
        assert_eq!(app.company_id, "c1");
        assert_eq!(app.documents.len(), 2);
        assert!(app
            .documents
            .iter()
            .all(|d| d.status == DocumentStatus::Uploaded));
        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history[1].action, "Submitted");

        // now visible in the submitter's list and the review queue
        assert_eq!(store.applications_for(&ram).len(), 4);
        assert!(store.review_queue().iter().any(|a| a.id == app.id));
        assert!(store
            .audit_logs()
            .iter()
            .any(|l| l.action == "Application Submitted" && l.target_id == app.id));
    }

    #[test]
    fn application_numbers_are_sequential() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        let first = store.submit(&ram, complete_wizard(&store)).unwrap();
        let second = store.submit(&ram, complete_wizard(&store)).unwrap();
        assert_eq!(first.application_number, "APP-2081-0006");
        assert_eq!(second.application_number, "APP-2081-0007");
    }

    #[test]
    fn staff_cannot_submit() {
        let store = store();
        let sub = complete_wizard(&store);
        let krishna = login(&store, "krishna@staff.gov").user;
        assert!(matches!(
            store.submit(&krishna, sub),
            Err(StoreError::Forbidden(_))
        ));
    }

    #[test]
    fn review_walks_the_lifecycle() {
        let store = store();
        let krishna = login(&store, "krishna@staff.gov").user;

        // app2 is submitted: approve straight away is illegal
        let err = store.review(&krishna, "app2", ReviewAction::Approve, "");
        assert!(matches!(
            err,
            Err(StoreError::Workflow(WorkflowError::InvalidTransition { .. }))
        ));

        let app = store
            .review(&krishna, "app2", ReviewAction::StartVerification, "")
            .unwrap();
        assert_eq!(app.status, ApplicationStatus::UnderVerification);

        let app = store
            .review(&krishna, "app2", ReviewAction::Approve, "")
            .unwrap();
        assert_eq!(app.status, ApplicationStatus::Approved);
        assert!(app
            .documents
            .iter()
            .all(|d| d.status == DocumentStatus::Verified));
        assert_eq!(app.history.last().unwrap().action, "Approved");

        // terminal: nothing further
        assert!(store
            .review(&krishna, "app2", ReviewAction::Return, "")
            .is_err());
    }

    #[test]
    fn return_records_remarks_on_application_and_history() {
        let store = store();
        let laxmi = login(&store, "laxmi@staff.gov").user;
        let app = store
            .review(&laxmi, "app3", ReviewAction::Return, "AGM resolution illegible")
            .unwrap();
        assert_eq!(app.status, ApplicationStatus::Returned);
        assert_eq!(app.remarks, "AGM resolution illegible");
        assert_eq!(app.history.last().unwrap().remarks, "AGM resolution illegible");
        assert!(store
            .audit_logs()
            .iter()
            .any(|l| l.action == "Application Returned" && l.target_id == "app3"));
    }

    #[test]
    fn company_user_cannot_review() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        assert!(matches!(
            store.review(&ram, "app2", ReviewAction::StartVerification, ""),
            Err(StoreError::Forbidden(_))
        ));
    }

    #[test]
    fn resubmission_bumps_version_and_reenters_the_queue() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        let app4 = store.application(&ram, "app4").unwrap();
        assert_eq!(app4.version, 2);

        let app = store
            .resubmit(
                &ram,
                "app4",
                app4.form_data.clone(),
                vec![
                    "Transfer Deed".into(),
                    "Board Approval".into(),
                    "Share Certificate".into(),
                ],
            )
            .unwrap();
        assert_eq!(app.version, 3);
        assert_eq!(app.status, ApplicationStatus::Submitted);
        assert!(app.remarks.is_empty());
        assert_eq!(app.history.last().unwrap().remarks, "Resubmitted after return");
        assert!(store.review_queue().iter().any(|a| a.id == "app4"));
    }

    #[test]
    fn resubmission_without_required_docs_is_blocked() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        let app4 = store.application(&ram, "app4").unwrap();
        // Transfer Deed was rejected and is not re-uploaded here
        let err = store.resubmit(&ram, "app4", app4.form_data.clone(), vec![]);
        assert!(matches!(
            err,
            Err(StoreError::Workflow(WorkflowError::GuardFailed { .. }))
        ));
    }

    #[test]
    fn resubmitting_a_non_returned_application_is_illegal() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        let app1 = store.application(&ram, "app1").unwrap();
        assert!(matches!(
            store.resubmit(&ram, "app1", app1.form_data.clone(), vec![]),
            Err(StoreError::Workflow(WorkflowError::InvalidTransition { .. }))
        ));
    }

    #[test]
    fn admin_creates_users_with_unique_emails() {
        let store = store();
        let admin = login(&store, "admin@registry.gov").user;
        let user = store
            .create_user(
                &admin,
                NewUser {
                    name: "Hari Bahadur Thapa".into(),
                    email: "hari@company.com".into(),
                    role: UserRole::User,
                    company_id: Some("c1".into()),
                },
            )
            .unwrap();
        assert_eq!(user.status, UserStatus::Active);

        assert!(matches!(
            store.create_user(
                &admin,
                NewUser {
                    name: "Duplicate".into(),
                    email: "hari@company.com".into(),
                    role: UserRole::User,
                    company_id: None,
                },
            ),
            Err(StoreError::Conflict(_))
        ));

        // new account can log in straight away
        assert!(store.login("hari@company.com", "").is_ok());
    }

    #[test]
    fn event_type_upsert_validates_select_options() {
        let store = store();
        let admin = login(&store, "admin@registry.gov").user;
        let bad = NewEventType {
            id: None,
            code: "BRANCH_OPEN".into(),
            name: "Branch Opening".into(),
            name_np: "शाखा खोल्ने".into(),
            category: "structural".into(),
            status: EventTypeStatus::Active,
            required_docs: vec!["Board Resolution".into()],
            fields: vec![EventField {
                name: "branchType".into(),
                label: "Branch Type".into(),
                field_type: FieldType::Select,
                mandatory: true,
                options: None,
            }],
        };
        assert!(matches!(
            store.upsert_event_type(&admin, bad),
            Err(StoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn template_update_bumps_version() {
        let store = store();
        let admin = login(&store, "admin@registry.gov").user;
        let updated = store
            .save_template(
                &admin,
                TemplateDraft {
                    id: Some("t2".into()),
                    code: "TPL-DIR-APPT".into(),
                    name: "Director Appointment Letter".into(),
                    event_type_id: "evt2".into(),
                    language: "English".into(),
                    format: "PDF".into(),
                    status: TemplateStatus::Active,
                    placeholders: vec!["company_name_eng".into(), "director_name".into()],
                },
            )
            .unwrap();
        assert_eq!(updated.version, 2);
        assert!(store
            .audit_logs()
            .iter()
            .any(|l| l.action == "Template Updated" && l.target_id == "t2"));
    }

    #[test]
    fn template_must_bind_to_an_existing_event_type() {
        let store = store();
        let admin = login(&store, "admin@registry.gov").user;
        assert!(matches!(
            store.save_template(
                &admin,
                TemplateDraft {
                    id: None,
                    code: "TPL-X".into(),
                    name: "X".into(),
                    event_type_id: "evt99".into(),
                    language: "English".into(),
                    format: "PDF".into(),
                    status: TemplateStatus::Active,
                    placeholders: vec![],
                },
            ),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn non_admin_cannot_touch_admin_surfaces() {
        let store = store();
        let ram = login(&store, "ram@company.com").user;
        assert!(matches!(
            store.create_user(
                &ram,
                NewUser {
                    name: "X".into(),
                    email: "x@x.com".into(),
                    role: UserRole::User,
                    company_id: None,
                },
            ),
            Err(StoreError::Forbidden(_))
        ));
    }
}
