#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Some(today) = NaiveDate::from_ymd_opt(2024, 6, 15) {
            let _ = fiscale::fiscal::decode_fiscal_code(s, today);
        }
    }
});
