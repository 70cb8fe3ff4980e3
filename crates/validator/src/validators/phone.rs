//! Phone number validator.
//!
//! Whitespace is insignificant (`+48 600 700 800` is fine); every other
//! separator is rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Locale, Validate, ValidationError};

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{9,15}$").expect("phone regex is valid"));

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

crate::validator! {
    /// Validates phone numbers: optional leading `+`, then 9 to 15 digits
    /// once all whitespace is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Validate;
    /// use formcheck_validator::validators::phone;
    ///
    /// assert!(phone().validate("+48 600 700 800").is_ok());
    /// assert!(phone().validate("600-700-800").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub Phone { locale: Locale } for str;
    rule(self, input) { PHONE_REGEX.is_match(&strip_whitespace(input)) }
    error(self, input) {
        ValidationError::domain_format("invalid_phone", self.locale.messages().invalid_phone)
    }
    new() { Self { locale: Locale::Polish } }
    fn phone();
}

impl Phone {
    /// Switches the message locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Validates a phone number with Polish messages.
pub fn validate_phone(input: &str) -> Result<(), ValidationError> {
    phone().validate(input)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("600700800")]
    #[case("+48600700800")]
    #[case("+48 600 700 800")]
    #[case(" 600\t700\n800 ")]
    #[case("123456789012345")]
    fn accepts(#[case] input: &str) {
        assert!(validate_phone(input).is_ok(), "{input}");
    }

    #[rstest]
    #[case("")]
    #[case("12345678")] // 8 digits
    #[case("1234567890123456")] // 16 digits
    #[case("600-700-800")]
    #[case("(600) 700 800")]
    #[case("48+600700800")]
    #[case("++48600700800")]
    #[case("600 700 80a")]
    fn rejects(#[case] input: &str) {
        let error = validate_phone(input).unwrap_err();
        assert_eq!(error.code, "invalid_phone");
        assert_eq!(error.message(), "Nieprawidłowy numer telefonu");
    }

    #[test]
    fn test_digit_limits() {
        assert!(validate_phone("+123456789").is_ok()); // 9 digits
        assert!(validate_phone("+12345678").is_err()); // 8 digits
        assert!(validate_phone("+123456789012345").is_ok()); // 15 digits
        assert!(validate_phone("+1234567890123456").is_err()); // 16 digits
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are Unicode `\d` but not phone digits.
        assert!(validate_phone("٦٠٠٧٠٠٨٠٠").is_err());
    }
}
