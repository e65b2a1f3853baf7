//! # Backend API Client Module
//!
//! HTTP client for the library-management backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, response helpers, LibraryApi impl
//! ├── auth.rs     - Admin signup and logout
//! ├── catalog.rs  - Book search, libraries for a book, locations
//! └── account.rs  - Current user info and borrowing
//! ```

pub mod account;
pub mod auth;
pub mod catalog;
pub mod client;

pub use client::ApiClient;
