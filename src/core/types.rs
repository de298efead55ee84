use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Outcome of a single-field validation.
///
/// Serializes as `{"isValid": true}` or
/// `{"isValid": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the input passed every check.
    pub is_valid: bool,
    /// Error message, present only when `is_valid` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// A failing result with the given message.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for ValidationResult {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self::valid(),
            Err(e) => Self::invalid(e.message),
        }
    }
}

/// Customer record fields that carry validation rules.
///
/// Ordering follows declaration order, which is the order entries appear in
/// an [`ErrorMap`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    FiscalCode,
    VatNumber,
    SdiCode,
    Email,
    Phone,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::FiscalCode,
        Field::VatNumber,
        Field::SdiCode,
        Field::Email,
        Field::Phone,
    ];

    /// The key used for this field in serialized records and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::FiscalCode => "fiscalCode",
            Field::VatNumber => "vatNumber",
            Field::SdiCode => "sdiCode",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to error message; only failing fields have an entry.
pub type ErrorMap = BTreeMap<Field, String>;

/// A customer record as submitted by a form or API client.
///
/// Every field is optional here; only `name` is mandatory, and that is
/// enforced by [`validate_customer`](super::validate_customer), not by the type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInput {
    /// Display or company name.
    pub name: Option<String>,
    /// Codice fiscale (16 characters).
    pub fiscal_code: Option<String>,
    /// Partita IVA (11 digits).
    pub vat_number: Option<String>,
    /// Sistema di Interscambio recipient code (7 characters).
    pub sdi_code: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

impl CustomerInput {
    /// The raw value submitted for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::FiscalCode => self.fiscal_code.as_deref(),
            Field::VatNumber => self.vat_number.as_deref(),
            Field::SdiCode => self.sdi_code.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
        }
    }
}
