use tracing::debug;

use super::builder::ValidationOptions;
use super::contact::{check_email, check_phone};
use super::error::ValidationError;
use super::types::{CustomerInput, ErrorMap, Field};
use crate::fiscal::{check_fiscal_code_with, check_sdi_code, check_vat_number_with};

/// Validate a customer record with the default options.
///
/// Returns one message per failing field; an empty map means the record is
/// valid. Only `name` is mandatory.
pub fn validate_customer(input: &CustomerInput) -> ErrorMap {
    validate_customer_with(input, &ValidationOptions::default())
}

/// Validate a customer record, honouring `options`.
pub fn validate_customer_with(input: &CustomerInput, options: &ValidationOptions) -> ErrorMap {
    customer_errors(input, options)
        .into_iter()
        .filter_map(|e| e.field.map(|field| (field, e.message)))
        .collect()
}

/// Validate a customer record and return all errors found (not just the
/// first), each tagged with its field and error kind.
pub fn customer_errors(input: &CustomerInput, options: &ValidationOptions) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let name_present = match input.name.as_deref() {
        Some(name) if options.name_trimmed() => !name.trim().is_empty(),
        Some(name) => !name.is_empty(),
        None => false,
    };
    if !name_present {
        errors.push(ValidationError::required(Field::Name));
    }

    for field in &Field::ALL[1..] {
        let Some(value) = input.get(*field) else {
            continue;
        };
        let checked = match field {
            Field::FiscalCode => check_fiscal_code_with(value, options),
            Field::VatNumber => check_vat_number_with(value, options),
            Field::SdiCode => check_sdi_code(value),
            Field::Email => check_email(value),
            Field::Phone => check_phone(value),
            Field::Name => continue,
        };
        if let Err(e) = checked {
            errors.push(e.on(*field));
        }
    }

    for e in &errors {
        if let Some(field) = e.field {
            debug!(field = %field, kind = %e.kind, "customer field failed validation");
        }
    }

    errors
}
