#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and a failure always carries a message.
        for r in [
            fiscale::validate_fiscal_code(s),
            fiscale::validate_vat_number(s),
            fiscale::validate_sdi_code(s),
            fiscale::validate_email(s),
            fiscale::validate_phone(s),
        ] {
            assert_eq!(r.is_valid, r.error.is_none());
        }

        let opts = fiscale::ValidationOptions::new()
            .allow_omocodia(true)
            .allow_vat_country_prefix(true);
        let _ = fiscale::fiscal::check_fiscal_code_with(s, &opts);
        let _ = fiscale::fiscal::check_vat_number_with(s, &opts);
    }
});
