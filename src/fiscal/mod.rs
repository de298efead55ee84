//! Italian fiscal identifiers: codice fiscale, partita IVA and SDI code.
//!
//! Every validator is a pure function. Empty input is always valid, since
//! each identifier is an optional field on a customer record.
//!
//! # Example
//!
//! ```
//! use fiscale::fiscal::*;
//!
//! assert!(validate_fiscal_code("RSSMRA80A01H501U").is_valid);
//! assert!(validate_vat_number("12345670785").is_valid);
//! assert!(validate_sdi_code("ABCDEFG").is_valid);
//!
//! // Normalized form for storage
//! assert_eq!(check_fiscal_code(" rssmra80a01h501u ").unwrap(), "RSSMRA80A01H501U");
//! ```

mod codice_fiscale;
#[cfg(feature = "decode")]
mod decode;
mod partita_iva;
mod sdi;

pub use codice_fiscale::{
    FISCAL_CODE_CHECKSUM_MESSAGE, FISCAL_CODE_FORMAT_MESSAGE, FISCAL_CODE_LENGTH_MESSAGE,
    OMOCODIA_LETTERS, check_fiscal_code, check_fiscal_code_with, fiscal_code_control_char,
    is_omocodic, normalize_omocodia, validate_fiscal_code, validate_fiscal_code_with,
};
#[cfg(feature = "decode")]
pub use decode::{FiscalCodeData, Gender, decode_fiscal_code};
pub use partita_iva::{
    VAT_CHECKSUM_MESSAGE, VAT_FORMAT_MESSAGE, check_vat_number, check_vat_number_with,
    validate_vat_number, validate_vat_number_with, vat_check_digit,
};
pub use sdi::{SDI_DEFAULT_CODE, SDI_FORMAT_MESSAGE, check_sdi_code, validate_sdi_code};
