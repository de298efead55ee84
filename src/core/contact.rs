//! Email and phone number validation.
//!
//! Both checks are deliberately loose: they reject obvious typos in a
//! checkout form, not every address a mail server would refuse.

use std::sync::LazyLock;

use regex::Regex;

use super::error::ValidationError;
use super::types::ValidationResult;

pub const EMAIL_FORMAT_MESSAGE: &str = "email address has an invalid format";
pub const PHONE_FORMAT_MESSAGE: &str = "phone number has an invalid format";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// Optional +39 country prefix, then 6-15 ASCII digits.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+39)?[0-9]{6,15}$").expect("phone pattern is a valid regex")
});

/// Validate an email address. Empty input is valid.
pub fn validate_email(email: &str) -> ValidationResult {
    check_email(email).into()
}

/// Check an email address, returning it unchanged on success.
pub fn check_email(email: &str) -> Result<String, ValidationError> {
    if email.is_empty() || EMAIL_RE.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(ValidationError::format(EMAIL_FORMAT_MESSAGE))
    }
}

/// Validate an Italian phone number. Empty input is valid.
///
/// Spaces, hyphens, dots and parentheses are ignored, so
/// `"+39 (333) 123-4567"` passes.
pub fn validate_phone(phone: &str) -> ValidationResult {
    check_phone(phone).into()
}

/// Check a phone number, returning it with separators removed.
pub fn check_phone(phone: &str) -> Result<String, ValidationError> {
    if phone.is_empty() {
        return Ok(String::new());
    }

    let cleaned = normalize_phone(phone);
    if PHONE_RE.is_match(&cleaned) {
        Ok(cleaned)
    } else {
        Err(ValidationError::format(PHONE_FORMAT_MESSAGE))
    }
}

/// Strip whitespace, `-`, `.`, `(` and `)` from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')'))
        .collect()
}
