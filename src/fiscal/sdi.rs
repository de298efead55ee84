//! SDI recipient code validation.

use crate::core::{ValidationError, ValidationResult};

pub const SDI_FORMAT_MESSAGE: &str = "SDI code must be 7 alphanumeric characters";

/// Recipient code used when the customer receives invoices by PEC or has no
/// channel registered with the exchange system.
pub const SDI_DEFAULT_CODE: &str = "0000000";

/// Validate a Sistema di Interscambio recipient code. Empty input is valid.
pub fn validate_sdi_code(code: &str) -> ValidationResult {
    check_sdi_code(code).into()
}

/// Check an SDI code, returning its trimmed uppercase form on success.
pub fn check_sdi_code(code: &str) -> Result<String, ValidationError> {
    if code.is_empty() {
        return Ok(String::new());
    }

    let normalized = code.trim().to_uppercase();
    if normalized.len() == 7 && normalized.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Ok(normalized)
    } else {
        Err(ValidationError::format(SDI_FORMAT_MESSAGE))
    }
}
