//! # Library Modal
//!
//! Selecting a book looks up the libraries holding it and opens a modal listing
//! them. Once the modal is open, coordinates for those libraries are resolved in a
//! second, independent request; until they arrive (or if they never do) each row
//! shows a placeholder instead of a map link. Each row offers a borrow action.
//!
//! Selections are numbered like search queries: if the user picks book A and then
//! book B before A's lookup returns, A's response is dropped. A borrow remembers
//! the selection it was started from, so a late answer for A never closes B's
//! modal. At most one borrow is in flight at a time.

use std::collections::HashMap;

use shared::{maps_link, Book, BorrowRequest, LibraryListing, Location};

use crate::core::error::{AppError, Result};
use crate::core::service::LibraryApi;
use crate::core::session::SessionStore;
use crate::state::cell::StateCell;

pub const LIBRARY_LOOKUP_FAILED: &str = "Error fetching library information. Please try again.";
pub const NO_LIBRARIES: &str = "No libraries currently have this book available.";
pub const LOCATION_UNAVAILABLE: &str = "Location information not available";
pub const BORROW_SUCCEEDED: &str = "Book borrowed successfully!";
pub const BORROW_FAILED: &str = "Failed to borrow book.";
pub const BORROW_IN_PROGRESS: &str = "A borrow request is already in progress.";
pub const LOGIN_TO_BORROW: &str = "Please log in to borrow books.";

/// Claim on one book selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Modal is open; coordinates should be fetched for these admin ids.
    Opened { admin_ids: Vec<String> },
    /// Nobody holds the book. The modal stays closed.
    Empty,
    /// Lookup failed. The modal stays closed.
    Failed,
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed { book_id: String },
    Failed(String),
    /// The modal went away (closed or reselected) before a failure came back.
    Discarded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryModalState {
    generation: u64,
    pending: Option<Book>,
    selected: Option<Book>,
    libraries: Vec<LibraryListing>,
    locations: HashMap<String, Location>,
    open: bool,
    /// Selection generation the in-flight borrow was started from.
    borrowing: Option<u64>,
    borrowed: Vec<String>,
}

impl LibraryModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_borrowing(&self) -> bool {
        self.borrowing.is_some()
    }

    pub fn selected(&self) -> Option<&Book> {
        self.selected.as_ref()
    }

    pub fn libraries(&self) -> &[LibraryListing] {
        &self.libraries
    }

    /// Ids of books borrowed during this visit, oldest first.
    pub fn borrowed(&self) -> &[String] {
        &self.borrowed
    }

    /// Admin ids of the listed libraries, first occurrence order, no duplicates.
    pub fn admin_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for id in self.libraries.iter().filter_map(LibraryListing::admin_id) {
            if !ids.iter().any(|seen| seen == id) {
                ids.push(id.to_string());
            }
        }
        ids
    }

    /// Maps link for a library, once both of its coordinates are known.
    pub fn map_link(&self, admin_id: Option<&str>) -> Option<String> {
        let location = self.locations.get(admin_id?)?;
        let (latitude, longitude) = location.coordinates()?;
        Some(maps_link(latitude, longitude))
    }

    pub fn select(&mut self, book: Book) -> SelectionTicket {
        self.generation += 1;
        if !self.open {
            self.selected = None;
            self.libraries.clear();
            self.locations.clear();
        }
        self.pending = Some(book);
        SelectionTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn libraries_loaded(
        &mut self,
        ticket: &SelectionTicket,
        result: Result<Vec<LibraryListing>>,
    ) -> OpenOutcome {
        if !self.is_current(ticket) {
            return OpenOutcome::Superseded;
        }
        let book = self.pending.take();

        match result {
            Ok(libraries) if libraries.is_empty() => OpenOutcome::Empty,
            Ok(libraries) => {
                self.libraries = libraries;
                self.selected = book;
                self.locations.clear();
                self.open = true;
                OpenOutcome::Opened {
                    admin_ids: self.admin_ids(),
                }
            }
            Err(e) => {
                tracing::error!("Library lookup failed: {}", e);
                OpenOutcome::Failed
            }
        }
    }

    /// Apply resolved coordinates. Ignored unless the modal is still showing the
    /// selection the ticket belongs to.
    pub fn locations_loaded(&mut self, ticket: &SelectionTicket, result: Result<Vec<Location>>) -> bool {
        if !self.open || !self.is_current(ticket) {
            return false;
        }

        match result {
            Ok(locations) => {
                self.locations = locations
                    .into_iter()
                    .map(|location| (location.admin_id.clone(), location))
                    .collect();
                true
            }
            Err(e) => {
                tracing::warn!("Could not resolve library locations: {}", e);
                self.locations.clear();
                false
            }
        }
    }

    pub fn begin_borrow(&mut self, library_id: &str, user_id: Option<String>) -> Result<BorrowRequest> {
        let book_id = match (&self.selected, self.open) {
            (Some(book), true) => book.id.clone(),
            _ => return Err(AppError::Validation("No book selected".to_string())),
        };
        if self.borrowing.is_some() {
            return Err(AppError::Validation(BORROW_IN_PROGRESS.to_string()));
        }
        let user_id = user_id.ok_or_else(|| AppError::Session(LOGIN_TO_BORROW.to_string()))?;

        self.borrowing = Some(self.generation);
        Ok(BorrowRequest {
            book_id,
            library_id: library_id.to_string(),
            user_id,
        })
    }

    /// Settle the in-flight borrow. A success is always recorded, but only closes
    /// the modal if it still shows the selection the borrow started from.
    pub fn borrow_finished(&mut self, request: &BorrowRequest, result: Result<()>) -> BorrowOutcome {
        let started_from = self.borrowing.take();
        let still_showing = self.open && started_from == Some(self.generation);

        match result {
            Ok(()) => {
                self.borrowed.push(request.book_id.clone());
                if still_showing {
                    self.open = false;
                }
                BorrowOutcome::Borrowed {
                    book_id: request.book_id.clone(),
                }
            }
            Err(e) => {
                tracing::error!("Borrowing {} from {} failed: {}", request.book_id, request.library_id, e);
                if still_showing {
                    BorrowOutcome::Failed(e.user_message(BORROW_FAILED))
                } else {
                    BorrowOutcome::Discarded
                }
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Select `book`, look up who holds it and, if anybody does, open the modal and
/// then resolve their coordinates.
pub async fn open_for_book<A, C, S>(api: &A, cell: &C, session: &S, book: Book) -> OpenOutcome
where
    A: LibraryApi + ?Sized,
    C: StateCell<LibraryModalState>,
    S: SessionStore + ?Sized,
{
    let title = book.title.clone();
    let Some(ticket) = cell.write(|state| state.select(book)) else {
        return OpenOutcome::Superseded;
    };

    let token = session.token();
    let result = api.libraries_for_book(&title, token.as_deref()).await;
    let outcome = cell
        .write(|state| state.libraries_loaded(&ticket, result))
        .unwrap_or(OpenOutcome::Superseded);

    if let OpenOutcome::Opened { admin_ids } = &outcome {
        if !admin_ids.is_empty() {
            let locations = api.locations(admin_ids).await;
            cell.write(|state| state.locations_loaded(&ticket, locations));
        }
    }

    outcome
}

/// Borrow the selected book from `library_id`.
pub async fn borrow_from_library<A, C, S>(api: &A, cell: &C, session: &S, library_id: &str) -> BorrowOutcome
where
    A: LibraryApi + ?Sized,
    C: StateCell<LibraryModalState>,
    S: SessionStore + ?Sized,
{
    let request = match cell.write(|state| state.begin_borrow(library_id, session.user_id())) {
        Some(Ok(request)) => request,
        Some(Err(e)) => return BorrowOutcome::Failed(e.user_message(BORROW_FAILED)),
        None => return BorrowOutcome::Discarded,
    };

    let token = session.token();
    let result = api.borrow(&request, token.as_deref()).await;

    cell.write(|state| state.borrow_finished(&request, result))
        .unwrap_or(BorrowOutcome::Discarded)
}
