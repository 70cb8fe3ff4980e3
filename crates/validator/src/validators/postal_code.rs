//! Polish postal code validator (`DD-DDD`).

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Locale, Validate, ValidationError};

static POSTAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{3}$").expect("postal code regex is valid"));

crate::validator! {
    /// Validates a Polish postal code: two digits, a dash, three digits.
    ///
    /// Any deviation yields the same format error.
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub PolishPostalCode { locale: Locale } for str;
    rule(self, input) { POSTAL_CODE_REGEX.is_match(input) }
    error(self, input) {
        ValidationError::domain_format(
            "invalid_postal_code",
            self.locale.messages().invalid_postal_code,
        )
    }
    new() { Self { locale: Locale::Polish } }
    fn polish_postal_code();
}

impl PolishPostalCode {
    /// Switches the message locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Validates a Polish postal code with Polish messages.
pub fn validate_polish_postal_code(input: &str) -> Result<(), ValidationError> {
    polish_postal_code().validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid() {
        assert!(validate_polish_postal_code("12-345").is_ok());
        assert!(validate_polish_postal_code("00-950").is_ok());
    }

    #[rstest]
    #[case("12345")]
    #[case("1-2345")]
    #[case("12-34")]
    #[case("12-3456")]
    #[case(" 12-345")]
    #[case("12-345 ")]
    #[case("12 345")]
    #[case("ab-cde")]
    #[case("")]
    fn rejects(#[case] input: &str) {
        assert_eq!(
            validate_polish_postal_code(input).unwrap_err().message(),
            "Nieprawidłowy kod pocztowy (format: XX-XXX)"
        );
    }
}
