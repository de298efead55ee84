//! Partita IVA (Italian VAT number) validation.

use tracing::trace;

use crate::core::{ValidationError, ValidationOptions, ValidationResult};

pub const VAT_FORMAT_MESSAGE: &str = "VAT number must be exactly 11 digits";
pub const VAT_CHECKSUM_MESSAGE: &str = "VAT number has an invalid check digit";

/// Compute the check digit for the first 10 digits of a VAT number.
///
/// Digits at odd 0-based indices are doubled, subtracting 9 when the result
/// exceeds 9. Returns `None` unless at least 10 ASCII digits are given.
pub fn vat_check_digit(digits: &str) -> Option<u32> {
    let bytes = digits.as_bytes();
    if bytes.len() < 10 {
        return None;
    }

    let mut sum = 0;
    for (i, &b) in bytes[..10].iter().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let mut d = u32::from(b - b'0');
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    Some((10 - sum % 10) % 10)
}

/// Validate a partita IVA. Empty input is valid.
///
/// Whitespace anywhere in the input is ignored.
pub fn validate_vat_number(vat: &str) -> ValidationResult {
    check_vat_number(vat).into()
}

/// Like [`validate_vat_number`], honouring `options`.
pub fn validate_vat_number_with(vat: &str, options: &ValidationOptions) -> ValidationResult {
    check_vat_number_with(vat, options).into()
}

/// Check a partita IVA, returning the bare 11 digits on success.
pub fn check_vat_number(vat: &str) -> Result<String, ValidationError> {
    check_vat_number_with(vat, &ValidationOptions::default())
}

/// Like [`check_vat_number`], honouring `options`.
pub fn check_vat_number_with(
    vat: &str,
    options: &ValidationOptions,
) -> Result<String, ValidationError> {
    if vat.is_empty() {
        return Ok(String::new());
    }

    let mut cleaned: String = vat.chars().filter(|c| !c.is_whitespace()).collect();
    if options.vat_country_prefix_allowed()
        && cleaned.len() > 2
        && cleaned.is_char_boundary(2)
        && cleaned[..2].eq_ignore_ascii_case("IT")
    {
        cleaned = cleaned[2..].to_string();
    }

    if cleaned.len() != 11 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::format(VAT_FORMAT_MESSAGE));
    }

    let expected = vat_check_digit(&cleaned)
        .ok_or_else(|| ValidationError::format(VAT_FORMAT_MESSAGE))?;
    let found = u32::from(cleaned.as_bytes()[10] - b'0');
    if found != expected {
        trace!(expected, found, "VAT number check digit mismatch");
        return Err(ValidationError::checksum(VAT_CHECKSUM_MESSAGE));
    }

    Ok(cleaned)
}
