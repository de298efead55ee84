//! Extract personal data embedded in a codice fiscale.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::codice_fiscale::{check_fiscal_code_with, normalize_omocodia};
use crate::core::{FiscaleError, ValidationOptions};

/// Month letters, January to December.
const MONTH_LETTERS: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'H', 'L', 'M', 'P', 'R', 'S', 'T'];

/// Offset added to the day of birth for women.
const FEMALE_DAY_OFFSET: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}

/// Data encoded in a codice fiscale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalCodeData {
    /// Three letters derived from the surname.
    pub surname_code: String,
    /// Three letters derived from the given name.
    pub name_code: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    /// Cadastral (Belfiore) code of the municipality or foreign country of
    /// birth, e.g. `H501` for Rome.
    pub birth_place_code: String,
}

impl FiscalCodeData {
    /// Foreign countries use cadastral codes starting with `Z`.
    pub fn is_foreign_born(&self) -> bool {
        self.birth_place_code.starts_with('Z')
    }
}

/// Decode a codice fiscale.
///
/// The code must pass validation; omocodic codes are accepted. The two-digit
/// year is placed in the latest century that keeps the birth date on or
/// before `reference_date` (usually today).
///
/// ```
/// use chrono::NaiveDate;
/// use fiscale::fiscal::*;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let data = decode_fiscal_code("RSSMRA80A01H501U", today).unwrap();
/// assert_eq!(data.birth_date, NaiveDate::from_ymd_opt(1980, 1, 1).unwrap());
/// assert_eq!(data.gender, Gender::Male);
/// assert_eq!(data.birth_place_code, "H501");
/// ```
pub fn decode_fiscal_code(
    code: &str,
    reference_date: NaiveDate,
) -> Result<FiscalCodeData, FiscaleError> {
    if code.trim().is_empty() {
        return Err(FiscaleError::Decode("fiscal code is empty".into()));
    }

    let options = ValidationOptions::new().allow_omocodia(true);
    let normalized = check_fiscal_code_with(code, &options)?;
    let plain = normalize_omocodia(&normalized);
    // Validation guarantees 16 ASCII characters from here on.
    let chars: Vec<char> = plain.chars().collect();

    // Cadastral codes are one letter and three digits.
    if !chars[12..15].iter().all(|c| c.is_ascii_digit()) {
        return Err(FiscaleError::Decode(format!(
            "invalid birth place code '{}'",
            &plain[11..15]
        )));
    }

    let two_digits = |i: usize| -> u32 {
        chars[i].to_digit(10).unwrap_or(0) * 10 + chars[i + 1].to_digit(10).unwrap_or(0)
    };

    let yy = two_digits(6);
    let month = MONTH_LETTERS
        .iter()
        .position(|&m| m == chars[8])
        .map(|i| i as u32 + 1)
        .ok_or_else(|| FiscaleError::Decode(format!("unknown month letter '{}'", chars[8])))?;

    let raw_day = two_digits(9);
    let (gender, day) = match raw_day {
        1..=31 => (Gender::Male, raw_day),
        41..=71 => (Gender::Female, raw_day - FEMALE_DAY_OFFSET),
        _ => {
            return Err(FiscaleError::Decode(format!(
                "day of birth {raw_day:02} out of range"
            )));
        }
    };

    let year = resolve_century(yy, month, day, reference_date);
    let birth_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        FiscaleError::Decode(format!("no such date {year:04}-{month:02}-{day:02}"))
    })?;

    Ok(FiscalCodeData {
        surname_code: plain[0..3].to_string(),
        name_code: plain[3..6].to_string(),
        birth_date,
        gender,
        birth_place_code: plain[11..15].to_string(),
    })
}

fn resolve_century(yy: u32, month: u32, day: u32, reference_date: NaiveDate) -> i32 {
    let ref_year = reference_date.year();
    let ref_yy = ref_year.rem_euclid(100) as u32;
    let century = ref_year - ref_year.rem_euclid(100);
    if (yy, month, day) > (ref_yy, reference_date.month(), reference_date.day()) {
        century - 100 + yy as i32
    } else {
        century + yy as i32
    }
}
