//! # View State
//!
//! Framework-neutral state machines behind each interactive widget, plus the
//! async drivers that run their remote calls.
//!
//! | Module | Widget |
//! |---|---|
//! | [`search`] | Debounced search input and results dropdown |
//! | [`library`] | Library/borrow modal |
//! | [`account`] | Account popover and logout |
//! | [`nav`] | Header scroll mode, mobile menu, route table |
//! | [`signup`] | Admin signup form |
//!
//! Drivers never hold a borrow of the state across an `.await`; they take a
//! [`StateCell`] and re-enter it after each response, checking that the ticket
//! they were given is still current.

pub mod account;
pub mod cell;
pub mod library;
pub mod nav;
pub mod resource;
pub mod search;
pub mod signup;

#[cfg(test)]
pub(crate) mod testing;

pub use account::{AccountPopupState, PointerTarget};
pub use cell::StateCell;
pub use library::{BorrowOutcome, LibraryModalState, OpenOutcome};
pub use nav::NavState;
pub use resource::Resource;
pub use search::{SearchAction, SearchOutcome, SearchState};
pub use signup::{SignupField, SignupOutcome, SignupState};
