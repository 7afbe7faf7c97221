//! Contact-form validation. Pure string checks; the web layer decides how
//! to surface the failure. Nothing is ever sent anywhere.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("please fill in your {0}")]
    MissingField(&'static str),
    #[error("that email address doesn't look right")]
    InvalidEmail,
}

/// Shape check, not RFC parsing: one `@` with a nonempty local part, and a
/// dot somewhere inside the domain. Matches what the site always accepted.
pub fn is_valid_email(s: &str) -> bool {
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.find('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::MissingField("name"));
    }
    if email.trim().is_empty() {
        return Err(FormError::MissingField("email"));
    }
    if message.trim().is_empty() {
        return Err(FormError::MissingField("message"));
    }
    if !is_valid_email(email.trim()) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}
