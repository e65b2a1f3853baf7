//! # Core Abstractions
//!
//! Foundational types shared by the API client and the view-state drivers:
//!
//! - **[`error`]**: Client error type (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`LibraryApi`] trait, the seam between view state and the backend
//! - **[`session`]**: The [`SessionStore`] trait over the stored token and user id
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use lib_client::core::LibraryApi;
//! use lib_client::services::api::ApiClient;
//! use lib_client::config::ClientConfig;
//!
//! // In production: the reqwest-backed client
//! let api: Box<dyn LibraryApi> = Box::new(ApiClient::new(&ClientConfig::default()));
//! ```

pub mod error;
pub mod service;
pub mod session;

pub use error::{AppError, Result};
pub use service::LibraryApi;
pub use session::{MemorySession, SessionStore};
