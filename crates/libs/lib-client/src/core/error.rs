//! # Common Error Types
//!
//! Consolidated error handling for the web client.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced a response (offline, CORS, timeout)
//! - **Remote**: the backend answered with a non-success status
//! - **Decode**: the response body did not match the expected shape
//! - **Validation**: input rejected locally, before any request
//! - **Session**: a stored credential the request needs is missing
//! - **Config**: malformed build configuration
//!
//! Empty result sets (no matching books, no libraries holding a book) are not
//! errors; callers model them as ordinary states.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use lib_client::core::error::AppError;
//!
//! let err = AppError::Remote { status: 409, message: Some("Email already exists".to_string()) };
//! assert_eq!(err.user_message("An error occurred during signup"), "Email already exists");
//!
//! let offline = AppError::Network("connection refused".to_string());
//! assert_eq!(offline.user_message("Failed to borrow book."), "Failed to borrow book.");
//! ```

use thiserror::Error;

/// Client-wide error type.
///
/// Each variant carries enough context for logging; what the user sees is decided
/// at the call site, usually through [`AppError::user_message`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Transport failure before any HTTP status was received.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status, with the server's `message` when it sent one.
    #[error("Request failed with status {status}{}", remote_suffix(.message))]
    Remote { status: u16, message: Option<String> },

    /// Response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Input validation failure.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing session credential (token or user id).
    #[error("Session error: {0}")]
    Session(String),

    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Message to show the user: the server's own message for remote errors that
    /// carry one, the local message for validation and session errors, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Remote { message: Some(message), .. } if !message.is_empty() => message.clone(),
            AppError::Validation(message) | AppError::Session(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status for remote errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn remote_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) if !message.is_empty() => format!(": {}", message),
        _ => String::new(),
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}
