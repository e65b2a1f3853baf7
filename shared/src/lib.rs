//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the LibraryHub web client and the
//! library-management backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Admin signup and error message bodies
//!   - **[`dto::catalog`]**: Books, library listings and locations
//!   - **[`dto::account`]**: Account info and borrow requests
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::resolve_image_url`]**: Resolve backend asset paths against the API origin
//!   - **[`utils::maps_link`]**: Build a map link for a pair of coordinates
//!
//! ## Wire Format
//!
//! The backend is document-store backed, so identifiers arrive as `_id` and a few
//! fields keep the backend's casing (`Library_name`, `adminId`, `bookId`). The
//! DTOs keep idiomatic snake_case names in Rust and map the wire names with
//! `#[serde(rename = ...)]`. Display-only fields the backend may omit are
//! `Option`s so a partial record never fails the whole response.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::catalog::Book;
//! use shared::utils::resolve_image_url;
//!
//! let book: Book = serde_json::from_str(
//!     r#"{"_id":"b1","title":"Dune","author":"Frank Herbert","image":"uploads/dune.jpg"}"#,
//! ).unwrap();
//!
//! let cover = resolve_image_url(book.image.as_deref(), "http://localhost:3002");
//! assert_eq!(cover.as_deref(), Some("http://localhost:3002/uploads/dune.jpg"));
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
