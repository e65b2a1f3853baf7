//! # Validation Utilities
//!
//! Input validation helpers.

use crate::core::error::{AppError, Result};

/// Validate that a string is not empty after trimming.
pub fn validate_not_empty(value: &str, field_name: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Names of the fields whose value is blank.
pub fn missing_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(name, value)| validate_not_empty(value, name).is_err())
        .map(|(name, _)| *name)
        .collect()
}

/// Fail with one combined `message` if any field is blank.
pub fn require_all(fields: &[(&str, &str)], message: &str) -> Result<()> {
    let missing = missing_fields(fields);
    if missing.is_empty() {
        return Ok(());
    }
    tracing::debug!("Missing required fields: {}", missing.join(", "));
    Err(AppError::Validation(message.to_string()))
}
