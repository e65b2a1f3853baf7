//! # Session Credentials
//!
//! The bearer token and user id are written by the external login flow. The web
//! app reads them from `localStorage`; tests use [`MemorySession`].

use std::cell::RefCell;

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the signed-in user's id
pub const USER_ID_KEY: &str = "userId";

/// Read access to the credentials left by the login flow.
pub trait SessionStore {
    fn token(&self) -> Option<String>;

    fn user_id(&self) -> Option<String>;

    /// Forget both credentials.
    fn clear(&self);
}

/// In-memory session, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
    user_id: RefCell<Option<String>>,
}

impl MemorySession {
    pub fn new(token: Option<&str>, user_id: Option<&str>) -> Self {
        Self {
            token: RefCell::new(token.map(str::to_string)),
            user_id: RefCell::new(user_id.map(str::to_string)),
        }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone().filter(|t| !t.is_empty())
    }

    fn user_id(&self) -> Option<String> {
        self.user_id.borrow().clone().filter(|id| !id.is_empty())
    }

    fn clear(&self) {
        self.token.replace(None);
        self.user_id.replace(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_count_as_missing() {
        let session = MemorySession::new(Some(""), Some("u1"));

        assert_eq!(session.token(), None);
        assert_eq!(session.user_id().as_deref(), Some("u1"));
    }

    #[test]
    fn test_clear_forgets_credentials() {
        let session = MemorySession::new(Some("jwt"), Some("u1"));

        session.clear();

        assert_eq!(session.token(), None);
        assert_eq!(session.user_id(), None);
    }
}
