//! # Service Traits
//!
//! The backend seam. View-state drivers only talk to [`LibraryApi`], so tests can
//! substitute an in-memory implementation for the reqwest client.

use async_trait::async_trait;
use shared::{AccountInfo, AdminSignupRequest, Book, BorrowRequest, LibraryListing, Location};

use crate::core::error::Result;

/// Operations exposed by the library-management backend.
///
/// Futures are not `Send`: the browser runs every request on its single-threaded
/// executor, and the same client is exercised on a current-thread runtime in tests.
#[async_trait(?Send)]
pub trait LibraryApi {
    /// Register a library admin. Returns the success status code.
    async fn admin_signup(&self, request: &AdminSignupRequest) -> Result<u16>;

    /// Search the catalog for `query`.
    async fn search_books(&self, query: &str) -> Result<Vec<Book>>;

    /// Libraries holding the book with the given title.
    async fn libraries_for_book(&self, title: &str, token: Option<&str>) -> Result<Vec<LibraryListing>>;

    /// Coordinates for a batch of library admin ids.
    async fn locations(&self, admin_ids: &[String]) -> Result<Vec<Location>>;

    /// Borrow a book from a library.
    async fn borrow(&self, request: &BorrowRequest, token: Option<&str>) -> Result<()>;

    /// Account info for the signed-in user.
    async fn account_info(&self) -> Result<AccountInfo>;

    /// End the server-side session.
    async fn logout(&self) -> Result<()>;
}
