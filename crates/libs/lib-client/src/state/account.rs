//! # Account Popup
//!
//! Popover anchored to the account icon. Every time it opens it fetches the
//! current user's info afresh; it closes on a second click of the icon or on a
//! pointer press anywhere outside both the icon and the popover.

use shared::AccountInfo;

use crate::core::error::Result;
use crate::core::service::LibraryApi;
use crate::core::session::SessionStore;
use crate::state::cell::StateCell;
use crate::state::resource::Resource;

pub const ACCOUNT_LOAD_FAILED: &str = "Failed to load account information";
pub const VALUE_UNAVAILABLE: &str = "N/A";

/// Where a pointer press landed, relative to the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Trigger,
    Popover,
    Outside,
}

/// Claim on one account fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPopupState {
    open: bool,
    generation: u64,
    info: Resource<AccountInfo>,
}

impl AccountPopupState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn info(&self) -> &Resource<AccountInfo> {
        &self.info
    }

    /// Open or close. Opening always starts a new fetch.
    pub fn toggle(&mut self) -> Option<FetchTicket> {
        if self.open {
            self.close();
            return None;
        }
        self.open = true;
        Some(self.start_fetch())
    }

    /// Fetch again after a failure.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !self.open || self.info.is_loading() {
            return None;
        }
        Some(self.start_fetch())
    }

    /// Returns true when the press closed the popup.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        if self.open && target == PointerTarget::Outside {
            self.close();
            return true;
        }
        false
    }

    pub fn close(&mut self) {
        self.open = false;
        self.generation += 1;
        self.info = Resource::Idle;
    }

    pub fn fetched(&mut self, ticket: &FetchTicket, result: Result<AccountInfo>) -> bool {
        if !self.open || ticket.generation != self.generation {
            return false;
        }
        self.info = match result {
            Ok(info) => Resource::Loaded(info),
            Err(e) => {
                tracing::error!("Failed to load account info: {}", e);
                Resource::Failed(ACCOUNT_LOAD_FAILED.to_string())
            }
        };
        true
    }

    fn start_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.info = Resource::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }
}

/// Display text for an optional account field.
pub fn display_value(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => VALUE_UNAVAILABLE,
    }
}

pub async fn load_account<A, C>(api: &A, cell: &C, ticket: FetchTicket) -> bool
where
    A: LibraryApi + ?Sized,
    C: StateCell<AccountPopupState>,
{
    let result = api.account_info().await;
    cell.write(|state| state.fetched(&ticket, result)).unwrap_or(false)
}

/// End the session: ask the backend to log out, then forget local credentials
/// whatever it answered. Returns whether the backend acknowledged.
pub async fn logout<A, S>(api: &A, session: &S) -> bool
where
    A: LibraryApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let acknowledged = match api.logout().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Logout request failed: {}", e);
            false
        }
    };
    session.clear();
    acknowledged
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::session::MemorySession;
    use crate::state::testing::{server_error, MockApi};

    #[tokio::test]
    async fn test_each_open_fetches_again() {
        let api = MockApi::new();
        let cell = RefCell::new(AccountPopupState::default());

        let ticket = cell.borrow_mut().toggle().unwrap();
        assert!(cell.borrow().info().is_loading());
        assert!(load_account(&api, &cell, ticket).await);
        assert_eq!(
            cell.borrow().info().loaded().and_then(|i| i.name.as_deref()),
            Some("Ada")
        );

        assert!(cell.borrow_mut().toggle().is_none());
        assert!(!cell.borrow().is_open());

        let ticket = cell.borrow_mut().toggle().unwrap();
        load_account(&api, &cell, ticket).await;

        assert_eq!(api.account_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_failure_shows_message_and_allows_retry() {
        let api = MockApi::new();
        *api.account_result.borrow_mut() = Err(server_error("nope"));
        let cell = RefCell::new(AccountPopupState::default());

        let ticket = cell.borrow_mut().toggle().unwrap();
        load_account(&api, &cell, ticket).await;
        assert_eq!(cell.borrow().info().error(), Some(ACCOUNT_LOAD_FAILED));

        *api.account_result.borrow_mut() = Ok(AccountInfo::default());
        let ticket = cell.borrow_mut().retry().unwrap();
        load_account(&api, &cell, ticket).await;

        assert!(cell.borrow().info().loaded().is_some());
    }

    #[tokio::test]
    async fn test_response_after_close_is_dropped() {
        let api = MockApi::new();
        let cell = RefCell::new(AccountPopupState::default());

        let ticket = cell.borrow_mut().toggle().unwrap();
        cell.borrow_mut().pointer_down(PointerTarget::Outside);
        let applied = load_account(&api, &cell, ticket).await;

        assert!(!applied);
        assert_eq!(*cell.borrow().info(), Resource::Idle);
    }

    #[test]
    fn test_pointer_inside_keeps_popup_open() {
        let mut state = AccountPopupState::default();
        state.toggle();

        assert!(!state.pointer_down(PointerTarget::Popover));
        assert!(!state.pointer_down(PointerTarget::Trigger));
        assert!(state.is_open());
        assert!(state.pointer_down(PointerTarget::Outside));
        assert!(!state.is_open());
    }

    #[test]
    fn test_display_value_placeholder() {
        assert_eq!(display_value(Some("Ada")), "Ada");
        assert_eq!(display_value(Some("")), VALUE_UNAVAILABLE);
        assert_eq!(display_value(None), VALUE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_on_failure() {
        let api = MockApi::new();
        *api.logout_result.borrow_mut() = Err(server_error("down"));
        let session = MemorySession::new(Some("jwt"), Some("u1"));

        let acknowledged = logout(&api, &session).await;

        assert!(!acknowledged);
        assert_eq!(api.logout_calls.get(), 1);
        assert_eq!(session.token(), None);
        assert_eq!(session.user_id(), None);
    }
}
