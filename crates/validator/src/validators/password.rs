//! Password strength validator.
//!
//! Checks run in a fixed order and the first failure wins:
//! length, lowercase letter, uppercase letter, digit. There is no
//! special-character requirement.

use crate::foundation::{ErrorKind, Locale, Validate, ValidationError};

/// Minimum number of characters in a password.
///
/// Counted in Unicode scalar values, not bytes or UTF-16 units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validates password strength.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::Validate;
/// use formcheck_validator::validators::password;
///
/// assert!(password().validate("StrongPass123").is_ok());
///
/// let error = password().validate("weak").unwrap_err();
/// assert_eq!(error.message(), "Hasło musi mieć co najmniej 8 znaków");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Password {
    locale: Locale,
}

impl Password {
    /// Creates a password validator with Polish messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the message locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Validate for Password {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let messages = self.locale.messages();
        let fail = |code: &'static str, message: &'static str| {
            Err(ValidationError::new(ErrorKind::DomainFormatFailure, code, message))
        };

        let length = input.chars().count();
        if length < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::new(
                ErrorKind::DomainFormatFailure,
                "password_too_short",
                messages.password_too_short,
            )
            .with_param("min", MIN_PASSWORD_LENGTH.to_string())
            .with_param("actual", length.to_string()));
        }
        if !input.chars().any(|c| c.is_ascii_lowercase()) {
            return fail("password_lowercase", messages.password_lowercase);
        }
        if !input.chars().any(|c| c.is_ascii_uppercase()) {
            return fail("password_uppercase", messages.password_uppercase);
        }
        if !input.chars().any(|c| c.is_ascii_digit()) {
            return fail("password_digit", messages.password_digit);
        }

        Ok(())
    }
}

/// Creates a password strength validator.
#[must_use]
pub fn password() -> Password {
    Password::new()
}

/// Validates password strength with Polish messages.
pub fn validate_password(input: &str) -> Result<(), ValidationError> {
    password().validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("weak", "password_too_short")]
    #[case("", "password_too_short")]
    #[case("Ab1Ab1A", "password_too_short")]
    #[case("ALLUPPER123", "password_lowercase")]
    #[case("alllower123", "password_uppercase")]
    #[case("NoDigitsHere", "password_digit")]
    fn reports_first_failing_check(#[case] input: &str, #[case] code: &str) {
        assert_eq!(validate_password(input).unwrap_err().code, code);
    }

    #[test]
    fn test_strong_password() {
        assert!(validate_password("StrongPass123").is_ok());
        assert!(validate_password("aB3aaaaa").is_ok());
    }

    #[test]
    fn test_no_special_character_required() {
        assert!(validate_password("Abcdefg1").is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters, 10 bytes
        assert_eq!(
            validate_password("Żółw12a").unwrap_err().code,
            "password_too_short"
        );
    }

    #[test]
    fn test_length_counts_scalar_values() {
        // 8 scalar values, 9 UTF-16 units
        assert!(validate_password("Abcdef1😀").is_ok());
        // 7 scalar values, 8 UTF-16 units
        assert_eq!(
            validate_password("Abcde1😀").unwrap_err().code,
            "password_too_short"
        );
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        // 'ż' is lowercase but not an ASCII letter
        assert_eq!(
            validate_password("ŻÓŁWIE12").unwrap_err().code,
            "password_lowercase"
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            validate_password("weak").unwrap_err().message(),
            "Hasło musi mieć co najmniej 8 znaków"
        );
        assert_eq!(
            password()
                .locale(Locale::English)
                .validate("nodigitsHERE")
                .unwrap_err()
                .message(),
            "Password must contain a digit"
        );
    }
}
