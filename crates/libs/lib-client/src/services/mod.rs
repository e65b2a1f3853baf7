//! # External Services
//!
//! - [`api`]: reqwest client for the library-management backend

pub mod api;
