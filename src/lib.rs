//! # fiscale
//!
//! Validation of Italian customer identifiers for point-of-sale and
//! invoicing back-offices: codice fiscale, partita IVA, SDI recipient code,
//! email and phone number, plus an aggregate check for a whole customer
//! record.
//!
//! Every validator is a pure, total function: any string (including `""`)
//! produces a result, nothing panics, and empty input counts as valid since
//! all identifiers are optional on a customer record.
//!
//! ## Quick Start
//!
//! ```rust
//! use fiscale::core::*;
//! use fiscale::fiscal::*;
//!
//! assert!(validate_fiscal_code("RSSMRA80A01H501U").is_valid);
//! assert!(!validate_vat_number("12345670786").is_valid);
//!
//! let customer = CustomerBuilder::new("Bar Centrale Snc")
//!     .vat_number("12345670785")
//!     .sdi_code("ABC1234")
//!     .email("not-an-email")
//!     .build();
//!
//! let errors = validate_customer(&customer);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[&Field::Email], "email address has an invalid format");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Value types, all validators, customer validation |
//! | `decode` | Birth date, gender and birth place from a codice fiscale |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod fiscal;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
#[cfg(feature = "core")]
pub use crate::fiscal::{validate_fiscal_code, validate_sdi_code, validate_vat_number};
