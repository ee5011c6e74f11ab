//! In-memory registry store for the company filing service.
//!
//! Holds every entity collection behind one `RwLock`, seeded from the
//! fixture data set. Submissions create applications, review actions
//! transition status and append history, admin actions update
//! configuration, and every mutation appends to the audit log.
//!
//! Nothing survives a process restart. Persistence is out of scope.

pub mod clock;
pub mod filter;
pub mod seed;
pub mod session;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::ApplicationFilter;
pub use session::{Session, SessionStore};
pub use store::{
    DashboardSummary, NewEventType, NewUser, RegistryStore, StoreError, TemplateDraft,
};
