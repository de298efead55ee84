//! Codice fiscale (Italian personal tax code) validation.
//!
//! Layout of the 16 characters:
//!
//! | Positions | Content                         |
//! |-----------|---------------------------------|
//! | 1-3       | surname consonants              |
//! | 4-6       | name consonants                 |
//! | 7-8       | year of birth                   |
//! | 9         | month letter                    |
//! | 10-11     | day of birth (+40 for women)    |
//! | 12-15     | cadastral code of birth place   |
//! | 16        | control character               |

use tracing::trace;

use crate::core::{ValidationError, ValidationOptions, ValidationResult};

pub const FISCAL_CODE_LENGTH_MESSAGE: &str = "fiscal code must be 16 characters";
pub const FISCAL_CODE_FORMAT_MESSAGE: &str = "fiscal code has an invalid format";
pub const FISCAL_CODE_CHECKSUM_MESSAGE: &str = "fiscal code has an invalid control character";

/// Letters that stand in for the digits 0-9 in an omocodic code.
pub const OMOCODIA_LETTERS: [char; 10] = ['L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V'];

/// Positions (0-based) that hold digits in a regular code.
pub(crate) const DIGIT_POSITIONS: [usize; 7] = [6, 7, 9, 10, 12, 13, 14];

#[derive(Clone, Copy)]
enum Slot {
    Letter,
    Digit,
    Alnum,
}

const LAYOUT: [Slot; 16] = [
    Slot::Letter,
    Slot::Letter,
    Slot::Letter,
    Slot::Letter,
    Slot::Letter,
    Slot::Letter,
    Slot::Digit,
    Slot::Digit,
    Slot::Letter,
    Slot::Digit,
    Slot::Digit,
    Slot::Letter,
    Slot::Alnum,
    Slot::Alnum,
    Slot::Alnum,
    Slot::Letter,
];

/// Values for characters at odd 1-based positions, `0`-`9` then `A`-`Z`.
const ODD_VALUES: [u32; 36] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, // 0-9
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, // A-J
    2, 4, 18, 20, 11, 3, 6, 8, 12, 14, // K-T
    16, 10, 22, 25, 24, 23, // U-Z
];

/// Values for characters at even 1-based positions, `0`-`9` then `A`-`Z`.
const EVEN_VALUES: [u32; 36] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, // 0-9
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, // A-J
    10, 11, 12, 13, 14, 15, 16, 17, 18, 19, // K-T
    20, 21, 22, 23, 24, 25, // U-Z
];

fn table_index(c: char) -> Option<usize> {
    match c {
        '0'..='9' => Some(c as usize - '0' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize + 10),
        _ => None,
    }
}

/// Compute the control character for the first 15 characters of a code.
///
/// Input must be uppercase ASCII alphanumerics; returns `None` otherwise or
/// when fewer than 15 characters are given. Characters beyond the 15th are
/// ignored.
pub fn fiscal_code_control_char(code: &str) -> Option<char> {
    let mut sum = 0u32;
    let mut count = 0;
    for (i, c) in code.chars().take(15).enumerate() {
        let idx = table_index(c)?;
        // 0-based even index = 1-based odd position
        sum += if i % 2 == 0 {
            ODD_VALUES[idx]
        } else {
            EVEN_VALUES[idx]
        };
        count += 1;
    }
    if count < 15 {
        return None;
    }
    char::from_u32('A' as u32 + sum % 26)
}

/// Validate a codice fiscale. Empty input is valid.
///
/// The code is trimmed and uppercased before checking, so
/// `"rssmra80a01h501u"` passes.
pub fn validate_fiscal_code(code: &str) -> ValidationResult {
    check_fiscal_code(code).into()
}

/// Like [`validate_fiscal_code`], honouring `options`.
pub fn validate_fiscal_code_with(code: &str, options: &ValidationOptions) -> ValidationResult {
    check_fiscal_code_with(code, options).into()
}

/// Check a codice fiscale, returning its normalized (trimmed, uppercase)
/// form on success.
pub fn check_fiscal_code(code: &str) -> Result<String, ValidationError> {
    check_fiscal_code_with(code, &ValidationOptions::default())
}

/// Like [`check_fiscal_code`], honouring `options`.
pub fn check_fiscal_code_with(
    code: &str,
    options: &ValidationOptions,
) -> Result<String, ValidationError> {
    if code.is_empty() {
        return Ok(String::new());
    }

    let normalized = code.trim().to_uppercase();
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != 16 {
        return Err(ValidationError::format(FISCAL_CODE_LENGTH_MESSAGE));
    }

    let layout_ok = chars.iter().zip(LAYOUT.iter()).all(|(&c, slot)| match slot {
        Slot::Letter => c.is_ascii_uppercase(),
        Slot::Alnum => c.is_ascii_uppercase() || c.is_ascii_digit(),
        Slot::Digit => {
            c.is_ascii_digit() || (options.omocodia_allowed() && OMOCODIA_LETTERS.contains(&c))
        }
    });
    if !layout_ok {
        return Err(ValidationError::format(FISCAL_CODE_FORMAT_MESSAGE));
    }

    let expected = fiscal_code_control_char(&normalized)
        .ok_or_else(|| ValidationError::format(FISCAL_CODE_FORMAT_MESSAGE))?;
    if chars[15] != expected {
        trace!(expected = %expected, found = %chars[15], "fiscal code control character mismatch");
        return Err(ValidationError::checksum(FISCAL_CODE_CHECKSUM_MESSAGE));
    }

    Ok(normalized)
}

/// Replace omocodia letters in the digit positions with their digits.
///
/// Input is expected to be a normalized 16-character code; characters
/// outside the digit positions are left untouched, as is anything that is
/// not a substitution letter.
pub fn normalize_omocodia(code: &str) -> String {
    code.chars()
        .enumerate()
        .map(|(i, c)| {
            if DIGIT_POSITIONS.contains(&i) {
                if let Some(d) = OMOCODIA_LETTERS.iter().position(|&l| l == c) {
                    return char::from(b'0' + d as u8);
                }
            }
            c
        })
        .collect()
}

/// Whether a normalized code uses omocodia substitutions.
pub fn is_omocodic(code: &str) -> bool {
    code.chars()
        .enumerate()
        .any(|(i, c)| DIGIT_POSITIONS.contains(&i) && OMOCODIA_LETTERS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn control_char_of_known_code() {
        assert_eq!(fiscal_code_control_char("RSSMRA80A01H501"), Some('U'));
        assert_eq!(fiscal_code_control_char("VRDGPP13R10B293"), Some('P'));
    }

    #[test]
    fn control_char_rejects_short_or_foreign_input() {
        assert_eq!(fiscal_code_control_char("RSSMRA80A01H50"), None);
        assert_eq!(fiscal_code_control_char("rssmra80a01h501"), None);
        assert_eq!(fiscal_code_control_char("RSSMRA80A01H5-1"), None);
    }

    #[test]
    fn odd_table_spot_checks() {
        assert_eq!(ODD_VALUES[table_index('0').unwrap()], 1);
        assert_eq!(ODD_VALUES[table_index('B').unwrap()], 0);
        assert_eq!(ODD_VALUES[table_index('M').unwrap()], 18);
        assert_eq!(ODD_VALUES[table_index('X').unwrap()], 25);
        assert_eq!(ODD_VALUES[table_index('Z').unwrap()], 23);
    }

    #[test]
    fn even_table_is_identity_mod_letters() {
        for d in 0..10u32 {
            let c = char::from_digit(d, 10).unwrap();
            assert_eq!(EVEN_VALUES[table_index(c).unwrap()], d);
        }
        for (i, c) in ('A'..='Z').enumerate() {
            assert_eq!(EVEN_VALUES[table_index(c).unwrap()], i as u32);
        }
    }

    #[test]
    fn valid_code() {
        assert_eq!(check_fiscal_code("RSSMRA80A01H501U").unwrap(), "RSSMRA80A01H501U");
    }

    #[test]
    fn lowercase_and_padding_normalized() {
        assert_eq!(
            check_fiscal_code("  rssmra80a01h501u ").unwrap(),
            "RSSMRA80A01H501U"
        );
    }

    #[test]
    fn empty_is_valid() {
        assert!(validate_fiscal_code("").is_valid);
    }

    #[test]
    fn whitespace_only_fails_length() {
        let err = check_fiscal_code("   ").unwrap_err();
        assert_eq!(err.message, FISCAL_CODE_LENGTH_MESSAGE);
    }

    #[test]
    fn wrong_control_char() {
        let err = check_fiscal_code("RSSMRA80A01H501A").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Checksum);
    }

    #[test]
    fn letter_in_year_rejected_by_default() {
        let err = check_fiscal_code("RSSMRAULALMHRLMD").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Format);
    }

    #[test]
    fn omocodic_code_accepted_when_enabled() {
        let opts = ValidationOptions::new().allow_omocodia(true);
        assert!(check_fiscal_code_with("RSSMRAULALMHRLMD", &opts).is_ok());
    }

    #[test]
    fn omocodia_only_for_substitution_letters() {
        // 'A' is not a substitution letter
        let opts = ValidationOptions::new().allow_omocodia(true);
        let err = check_fiscal_code_with("RSSMRAA0A01H501U", &opts).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Format);
    }

    #[test]
    fn normalize_omocodia_restores_digits() {
        assert_eq!(normalize_omocodia("RSSMRAULALMHRLMD"), "RSSMRA80A01H501D");
        assert_eq!(normalize_omocodia("RSSMRA80A01H501U"), "RSSMRA80A01H501U");
    }

    #[test]
    fn omocodic_detection() {
        assert!(is_omocodic("RSSMRA80A01H50MM"));
        assert!(!is_omocodic("RSSMRA80A01H501U"));
    }

    #[test]
    fn non_substitution_letters_are_not_omocodic() {
        assert!(!is_omocodic("RSSMRA80A01HAAAJ"));
        assert!(!is_omocodic("RSSMRA80A01H50AV"));
    }
}
