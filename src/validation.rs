//! Local checks run before a message is handed to the delivery service

use crate::state::{ContactField, ContactForm};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// Why the form was rejected locally. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Check presence of every field, then the email shape.
///
/// Values are not trimmed: a field holding only spaces counts as present.
pub fn validate(form: &ContactForm) -> Result<(), ValidationError> {
    if ContactField::ALL.iter().any(|f| form.get(*f).is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(form.email.as_text()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Whether `email` has the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
