//! Session tokens for the lifetime of the process.
//!
//! An opaque UUID maps to a user id. No expiry, no refresh, no persistence
//! across restarts; `logout` clears the mapping unconditionally. This is a
//! session *holder*, not an authentication boundary (Non-goal).

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use uuid::Uuid;

use ocr_types::User;

/// A logged-in identity, as returned by `login`.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: Uuid,
    pub user: User,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    tokens: RwLock<HashMap<Uuid, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for a user id.
    pub fn issue(&self, user_id: &str) -> Uuid {
        let token = Uuid::new_v4();
        self.tokens
            .write()
            .expect("session lock poisoned")
            .insert(token, user_id.to_string());
        token
    }

    /// Resolve a token to the user id it was issued for.
    pub fn user_id(&self, token: &Uuid) -> Option<String> {
        self.tokens
            .read()
            .expect("session lock poisoned")
            .get(token)
            .cloned()
    }

    /// Drop a token. Unknown tokens are ignored.
    pub fn revoke(&self, token: &Uuid) {
        self.tokens
            .write()
            .expect("session lock poisoned")
            .remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_resolve_revoke() {
        let store = SessionStore::new();
        let token = store.issue("u1");
        assert_eq!(store.user_id(&token).as_deref(), Some("u1"));

        store.revoke(&token);
        assert_eq!(store.user_id(&token), None);

        // revoking again is a no-op
        store.revoke(&token);
    }

    #[test]
    fn unknown_token_resolves_to_nothing() {
        let store = SessionStore::new();
        assert_eq!(store.user_id(&Uuid::new_v4()), None);
    }
}
