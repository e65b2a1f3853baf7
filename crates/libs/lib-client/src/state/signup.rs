//! # Admin Signup Form
//!
//! Four required fields. Blank fields are caught locally with one combined
//! message; anything else goes to the backend, which must answer 201.

use shared::AdminSignupRequest;

use crate::core::error::{AppError, Result};
use crate::core::service::LibraryApi;
use crate::state::cell::StateCell;
use crate::utils::validation::require_all;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const SIGNUP_FAILED: &str = "An error occurred during signup";
pub const SIGNUP_SUCCEEDED: &str = "Signup successful!";
pub const SIGNUP_IN_PROGRESS: &str = "Signup already in progress";

const CREATED: u16 = 201;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    LibraryName,
    Address,
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    Failed(String),
    /// The form went away before the response came back.
    Discarded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    form: AdminSignupRequest,
    error: Option<String>,
    submitting: bool,
}

impl SignupState {
    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::LibraryName => &self.form.library_name,
            SignupField::Address => &self.form.address,
            SignupField::Email => &self.form.email,
            SignupField::Password => &self.form.password,
        }
    }

    pub fn set_field(&mut self, field: SignupField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SignupField::LibraryName => self.form.library_name = value,
            SignupField::Address => self.form.address = value,
            SignupField::Email => self.form.email = value,
            SignupField::Password => self.form.password = value,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Signing up..."
        } else {
            "Sign up"
        }
    }

    /// Validate and lock the form. The returned request is what gets sent.
    pub fn begin_submit(&mut self) -> Result<AdminSignupRequest> {
        if self.submitting {
            return Err(AppError::Validation(SIGNUP_IN_PROGRESS.to_string()));
        }
        self.error = None;

        let fields = [
            ("library_name", self.form.library_name.as_str()),
            ("address", self.form.address.as_str()),
            ("email", self.form.email.as_str()),
            ("password", self.form.password.as_str()),
        ];
        if let Err(e) = require_all(&fields, ALL_FIELDS_REQUIRED) {
            self.error = Some(e.user_message(ALL_FIELDS_REQUIRED));
            return Err(e);
        }

        self.submitting = true;
        Ok(self.form.clone())
    }

    pub fn finish(&mut self, result: Result<u16>) -> SignupOutcome {
        self.submitting = false;

        let message = match result {
            Ok(CREATED) => return SignupOutcome::Created,
            Ok(status) => {
                tracing::warn!("Signup answered {} instead of {}", status, CREATED);
                SIGNUP_FAILED.to_string()
            }
            Err(e) => {
                tracing::error!("Signup failed: {}", e);
                e.user_message(SIGNUP_FAILED)
            }
        };
        self.error = Some(message.clone());
        SignupOutcome::Failed(message)
    }
}

pub async fn submit_signup<A, C>(api: &A, cell: &C) -> SignupOutcome
where
    A: LibraryApi + ?Sized,
    C: StateCell<SignupState>,
{
    let request = match cell.write(|state| state.begin_submit()) {
        Some(Ok(request)) => request,
        Some(Err(e)) => return SignupOutcome::Failed(e.user_message(SIGNUP_FAILED)),
        None => return SignupOutcome::Discarded,
    };

    let result = api.admin_signup(&request).await;
    cell.write(|state| state.finish(result))
        .unwrap_or(SignupOutcome::Discarded)
}
