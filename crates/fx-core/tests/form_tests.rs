// Contact-form validation rules.

use fx_core::{is_valid_email, validate_contact, FormError};

#[test]
fn accepts_ordinary_addresses() {
    for email in [
        "me@example.com",
        "first.last@sub.domain.org",
        "user+tag@host.io",
        "x@y.zz",
    ] {
        assert!(is_valid_email(email), "rejected {email}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "",
        "plain",
        "no-at.example.com",
        "two@@example.com",
        "a@b@c.com",
        "@example.com",
        "user@",
        "user@nodot",
        "user@.com",
        "user@com.",
        "spa ce@example.com",
        "user@exa mple.com",
    ] {
        assert!(!is_valid_email(email), "accepted {email}");
    }
}

#[test]
fn missing_fields_are_reported_in_order() {
    assert_eq!(
        validate_contact("", "a@b.co", "hello"),
        Err(FormError::MissingField("name"))
    );
    assert_eq!(
        validate_contact("Ana", "", "hello"),
        Err(FormError::MissingField("email"))
    );
    assert_eq!(
        validate_contact("Ana", "a@b.co", ""),
        Err(FormError::MissingField("message"))
    );
    // Whitespace-only counts as missing.
    assert_eq!(
        validate_contact("   ", "a@b.co", "hello"),
        Err(FormError::MissingField("name"))
    );
}

#[test]
fn bad_email_is_reported_after_presence_checks() {
    assert_eq!(
        validate_contact("Ana", "not-an-email", "hello"),
        Err(FormError::InvalidEmail)
    );
}

#[test]
fn valid_submission_passes() {
    assert_eq!(validate_contact("Ana", "ana@example.com", "Hi there!"), Ok(()));
    // Surrounding whitespace on the email is tolerated.
    assert_eq!(validate_contact("Ana", "  ana@example.com  ", "Hi"), Ok(()));
}

#[test]
fn error_messages_read_like_ui_copy() {
    assert_eq!(
        FormError::MissingField("name").to_string(),
        "please fill in your name"
    );
    assert_eq!(
        FormError::InvalidEmail.to_string(),
        "that email address doesn't look right"
    );
}
