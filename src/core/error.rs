use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Field;

/// Errors returned by operations that require a valid identifier.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FiscaleError {
    /// The input failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The identifier is well-formed but its embedded data cannot be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Wrong length, wrong character class or wrong shape.
    Format,
    /// Structurally valid, but the control character or digit does not match.
    Checksum,
    /// A mandatory field is missing.
    Required,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Format => "format",
            ErrorKind::Checksum => "checksum",
            ErrorKind::Required => "required",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure with its category and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Customer field the error belongs to, when known.
    pub field: Option<Field>,
    /// Failure category.
    pub kind: ErrorKind,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{}: {}", field, self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Create a format error without a field.
    pub fn format(message: impl Into<String>) -> Self {
        Self {
            field: None,
            kind: ErrorKind::Format,
            message: message.into(),
        }
    }

    /// Create a checksum error without a field.
    pub fn checksum(message: impl Into<String>) -> Self {
        Self {
            field: None,
            kind: ErrorKind::Checksum,
            message: message.into(),
        }
    }

    /// Create a required-field error.
    pub fn required(field: Field) -> Self {
        Self {
            field: Some(field),
            kind: ErrorKind::Required,
            message: format!("{} is required", field.as_str()),
        }
    }

    /// Attach the customer field this error belongs to.
    pub fn on(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_field() {
        let err = ValidationError::format("bad shape");
        assert_eq!(err.to_string(), "bad shape");
    }

    #[test]
    fn display_with_field() {
        let err = ValidationError::checksum("bad digit").on(Field::VatNumber);
        assert_eq!(err.to_string(), "vatNumber: bad digit");
    }

    #[test]
    fn required_message_names_field() {
        let err = ValidationError::required(Field::Name);
        assert_eq!(err.kind, ErrorKind::Required);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn fiscale_error_wraps_validation() {
        let err: FiscaleError = ValidationError::format("x").into();
        assert_eq!(err.to_string(), "validation failed: x");
    }
}
