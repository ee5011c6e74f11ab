//! Entity model for the company registry filing service.
//!
//! Pure data shapes shared by the store, the workflow engine, and the HTTP
//! API: users, companies with their owned collections, event-type form
//! schemas, applications with documents and history, document-generation
//! templates, and the audit log.
//!
//! Ids are short opaque strings (`"u1"`, `"app4"`); runtime-created entities
//! receive UUID-derived ids from the store. Dates are calendar-opaque
//! strings because the registry runs on Bikram Sambat dates.

pub mod application;
pub mod audit;
pub mod company;
pub mod event;
pub mod template;
pub mod user;

pub use application::{
    Application, ApplicationDocument, ApplicationStatus, DocumentStatus, HistoryEntry,
    UnknownStatusError,
};
pub use audit::AuditLog;
pub use company::{
    Address, Branch, BranchStatus, CapitalStructure, Company, CompanyStatus, Director,
    DirectorStatus, ShareType, Shareholder, ShareholderStatus,
};
pub use event::{
    value_is_absent, EventField, EventType, EventTypeStatus, FieldType, FieldValueError,
};
pub use template::{Template, TemplateStatus};
pub use user::{UnknownRoleError, User, UserRole, UserStatus};
