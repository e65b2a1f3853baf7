//! # LibraryHub Client Library
//!
//! Everything the LibraryHub browser UI does that does not need a DOM.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  library-web (Leptos CSR, wasm32)            │
//! │  components / pages / browser session store  │
//! └──────────────────────┬───────────────────────┘
//!                        │ StateCell, drivers
//! ┌──────────────────────▼───────────────────────┐
//! │  lib-client (this crate)                     │
//! │  state    - search, modal, popover, signup   │
//! │  core     - AppError, LibraryApi, sessions   │
//! │  services - reqwest ApiClient                │
//! └──────────────────────┬───────────────────────┘
//!                        │ HTTP + cookies / bearer
//!               ┌────────▼─────────┐
//!               │  Backend API     │
//!               └──────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **config**: Build-time configuration and global access
//! - **core**: Error type, the `LibraryApi` service trait, session credentials
//! - **services**: The reqwest-backed `ApiClient`
//! - **state**: Widget state machines and their async drivers
//! - **utils**: Input validation

pub mod config;
pub mod core;
pub mod services;
pub mod state;
pub mod utils;

pub use crate::core::{AppError, LibraryApi, Result, SessionStore};
pub use config::{client_config, init_config, ClientConfig};
pub use services::api::ApiClient;
