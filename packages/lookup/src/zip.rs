//! ZIP code input handling.

use std::sync::LazyLock;

use regex::Regex;

use crate::LookupError;

/// Message shown when a submitted ZIP code is malformed.
pub const INVALID_ZIP_MESSAGE: &str = "Please enter a valid 5-digit ZIP code";

/// Maximum number of characters the input field keeps.
pub const ZIP_LEN: usize = 5;

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("valid regex"));

/// Checks that `input` is exactly five ASCII digits.
///
/// # Errors
///
/// Returns [`LookupError::InputValidation`] for anything else, including
/// surrounding whitespace.
pub fn validate_zip(input: &str) -> Result<&str, LookupError> {
    if ZIP_RE.is_match(input) {
        Ok(input)
    } else {
        Err(LookupError::InputValidation {
            message: INVALID_ZIP_MESSAGE.to_string(),
        })
    }
}

/// Applies the input field's rules to raw text: keep ASCII digits only,
/// truncated to [`ZIP_LEN`] characters.
#[must_use]
pub fn sanitize_zip_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ZIP_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_five_digits() {
        for zip in ["90210", "00000", "10001"] {
            assert_eq!(validate_zip(zip).unwrap(), zip);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["abcde", "1234", "123456", "", " 90210", "9021O", "９0210"] {
            let err = validate_zip(bad).unwrap_err();
            assert!(matches!(err, LookupError::InputValidation { .. }), "{bad:?}");
            assert_eq!(err.to_string(), INVALID_ZIP_MESSAGE);
        }
    }

    #[test]
    fn sanitize_keeps_digits_and_truncates() {
        assert_eq!(sanitize_zip_input("90210-1234"), "90210");
        assert_eq!(sanitize_zip_input(" 9 0 2 "), "902");
        assert_eq!(sanitize_zip_input("abc"), "");
        assert_eq!(sanitize_zip_input("１２３45"), "45");
    }
}
