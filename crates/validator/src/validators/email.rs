//! E-mail address validator.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Locale, Validate, ValidationError};

// Deliberately loose: something@something.something, no whitespace and no
// second `@`. No length bound and no TLD check.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

crate::validator! {
    /// Validates e-mail address format.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Validate;
    /// use formcheck_validator::validators::email;
    ///
    /// assert!(email().validate("jan.kowalski@example.pl").is_ok());
    /// assert!(email().validate("jan.kowalski@localhost").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub Email { locale: Locale } for str;
    rule(self, input) { EMAIL_REGEX.is_match(input) }
    error(self, input) {
        ValidationError::domain_format("invalid_email", self.locale.messages().invalid_email)
    }
    new() { Self { locale: Locale::Polish } }
    fn email();
}

impl Email {
    /// Switches the message locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Validates an e-mail address with Polish messages.
pub fn validate_email(input: &str) -> Result<(), ValidationError> {
    email().validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("a@b.c")]
    #[case("first.last+tag@sub.domain.pl")]
    fn accepts(#[case] input: &str) {
        assert!(validate_email(input).is_ok(), "{input}");
    }

    #[rstest]
    #[case("")]
    #[case("invalid")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@example")]
    #[case("user name@example.com")]
    #[case("user@exa mple.com")]
    #[case("user@@example.com")]
    fn rejects(#[case] input: &str) {
        let error = validate_email(input).unwrap_err();
        assert_eq!(error.message(), "Nieprawidłowy adres email");
    }

    #[test]
    fn test_english_locale() {
        let error = email().locale(Locale::English).validate("nope").unwrap_err();
        assert_eq!(error.message(), "Invalid email address");
    }
}
