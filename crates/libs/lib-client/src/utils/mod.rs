//! # Utilities

pub mod validation;
