use super::types::CustomerInput;

/// Builder for constructing customer records.
///
/// ```
/// use fiscale::core::*;
///
/// let customer = CustomerBuilder::new("Mario Rossi")
///     .fiscal_code("RSSMRA80A01H501U")
///     .email("mario.rossi@example.it")
///     .phone("+39 333 1234567")
///     .build();
///
/// assert!(validate_customer(&customer).is_empty());
/// ```
pub struct CustomerBuilder {
    name: String,
    fiscal_code: Option<String>,
    vat_number: Option<String>,
    sdi_code: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl CustomerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fiscal_code: None,
            vat_number: None,
            sdi_code: None,
            email: None,
            phone: None,
        }
    }

    pub fn fiscal_code(mut self, code: impl Into<String>) -> Self {
        self.fiscal_code = Some(code.into());
        self
    }

    pub fn vat_number(mut self, number: impl Into<String>) -> Self {
        self.vat_number = Some(number.into());
        self
    }

    pub fn sdi_code(mut self, code: impl Into<String>) -> Self {
        self.sdi_code = Some(code.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Build the record. No validation happens here.
    pub fn build(self) -> CustomerInput {
        CustomerInput {
            name: Some(self.name),
            fiscal_code: self.fiscal_code,
            vat_number: self.vat_number,
            sdi_code: self.sdi_code,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Switches that relax or tighten the default validation rules.
///
/// `ValidationOptions::default()` gives the standard behaviour used by
/// [`validate_customer`](super::validate_customer).
///
/// ```
/// use fiscale::core::*;
///
/// let opts = ValidationOptions::new()
///     .allow_omocodia(true)
///     .allow_vat_country_prefix(true);
/// assert!(opts.omocodia_allowed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    allow_omocodia: bool,
    allow_vat_country_prefix: bool,
    trim_name: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            allow_omocodia: false,
            allow_vat_country_prefix: false,
            trim_name: true,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept fiscal codes whose digit positions use the substitution
    /// letters `LMNPQRSTUV`, as issued when two people share a code.
    pub fn allow_omocodia(mut self, allow: bool) -> Self {
        self.allow_omocodia = allow;
        self
    }

    /// Accept VAT numbers written with a leading `IT` country prefix.
    pub fn allow_vat_country_prefix(mut self, allow: bool) -> Self {
        self.allow_vat_country_prefix = allow;
        self
    }

    /// Trim the customer name before checking it is present.
    /// When disabled, only a truly empty name counts as missing.
    pub fn trim_name(mut self, trim: bool) -> Self {
        self.trim_name = trim;
        self
    }

    pub fn omocodia_allowed(&self) -> bool {
        self.allow_omocodia
    }

    pub fn vat_country_prefix_allowed(&self) -> bool {
        self.allow_vat_country_prefix
    }

    pub fn name_trimmed(&self) -> bool {
        self.trim_name
    }
}
