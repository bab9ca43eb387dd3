use super::{ContactFields, ContactSubmission, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Checks the fields in a fixed order and stops at the first failure.
///
/// Presence checks trim whitespace; the submission itself carries the
/// fields untrimmed.
pub fn validate(fields: &ContactFields) -> Result<ContactSubmission, ValidationError> {
    if fields.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if fields.phone.trim().is_empty() {
        return Err(ValidationError::MissingPhone);
    }
    if fields.email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ContactSubmission {
        name: fields.name.clone(),
        phone: fields.phone.clone(),
        email: fields.email.clone(),
        message: fields.message.clone(),
    })
}
