//! Polish national identifiers: PESEL (personal ID) and NIP (tax ID).
//!
//! Both are fixed-length digit strings whose last digit is a weighted-sum
//! control digit. Validation is two-stage: the format check guarantees the
//! exact digit count, and only then is the checksum computed, so short or
//! malformed input can never be indexed out of bounds.

use chrono::NaiveDate;

use crate::foundation::{Locale, Validate, ValidationError};

const PESEL_LENGTH: usize = 11;
const PESEL_WEIGHTS: [u32; PESEL_LENGTH - 1] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

const NIP_LENGTH: usize = 10;
const NIP_WEIGHTS: [u32; NIP_LENGTH - 1] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

// ============================================================================
// DIGIT HELPERS
// ============================================================================

/// Parses exactly `N` ASCII digits.
fn parse_digits<const N: usize>(input: &str) -> Option<[u32; N]> {
    let bytes = input.as_bytes();
    if bytes.len() != N || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut digits = [0; N];
    for (digit, byte) in digits.iter_mut().zip(bytes) {
        *digit = u32::from(byte - b'0');
    }
    Some(digits)
}

fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

fn pesel_control(body: &[u32]) -> u32 {
    (10 - weighted_sum(body, &PESEL_WEIGHTS) % 10) % 10
}

fn nip_control(body: &[u32]) -> u32 {
    weighted_sum(body, &NIP_WEIGHTS) % 11
}

/// Computes the PESEL control digit for a 10-digit body.
///
/// Returns `None` unless `body` is exactly 10 ASCII digits.
///
/// ```
/// use formcheck_validator::validators::{pesel_control_digit, validate_pesel};
///
/// let control = pesel_control_digit("4405140135").unwrap();
/// assert_eq!(control, 9);
/// assert!(validate_pesel(&format!("4405140135{control}")).is_ok());
/// ```
#[must_use]
pub fn pesel_control_digit(body: &str) -> Option<u32> {
    parse_digits::<{ PESEL_LENGTH - 1 }>(body).map(|digits| pesel_control(&digits))
}

/// Computes the NIP control value for a 9-digit body.
///
/// The result is the raw `sum mod 11` and may be `10`, a value no single
/// digit can carry: every NIP built on such a body fails validation.
/// Returns `None` unless `body` is exactly 9 ASCII digits.
#[must_use]
pub fn nip_control_digit(body: &str) -> Option<u32> {
    parse_digits::<{ NIP_LENGTH - 1 }>(body).map(|digits| nip_control(&digits))
}

// ============================================================================
// PESEL
// ============================================================================

/// Validates PESEL numbers (11 digits, mod-10 weighted control digit).
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::{ErrorKind, Validate};
/// use formcheck_validator::validators::pesel;
///
/// assert!(pesel().validate("44051401359").is_ok());
///
/// let error = pesel().validate("4405140135").unwrap_err();
/// assert_eq!(error.kind, ErrorKind::DomainFormatFailure);
///
/// let error = pesel().validate("44051401358").unwrap_err();
/// assert_eq!(error.kind, ErrorKind::DomainChecksumFailure);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pesel {
    locale: Locale,
}

impl Pesel {
    /// Creates a PESEL validator with Polish messages.
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

    fn checked_digits(&self, input: &str) -> Result<[u32; PESEL_LENGTH], ValidationError> {
        let messages = self.locale.messages();
        let digits = parse_digits::<PESEL_LENGTH>(input)
            .ok_or_else(|| ValidationError::domain_format("pesel_format", messages.pesel_format))?;

        let (body, check) = digits.split_at(PESEL_LENGTH - 1);
        let expected = pesel_control(body);
        if expected != check[0] {
            return Err(
                ValidationError::domain_checksum("pesel_checksum", messages.pesel_checksum)
                    .with_param("expected", expected.to_string())
                    .with_param("actual", check[0].to_string()),
            );
        }
        Ok(digits)
    }

    /// Validates the number and decodes the birth date and sex it encodes.
    ///
    /// Unlike [`Validate::validate`], this also rejects numbers whose date
    /// part is not a real calendar date.
    pub fn decode(&self, input: &str) -> Result<PeselDetails, ValidationError> {
        let digits = self.checked_digits(input)?;
        let invalid_date = || {
            ValidationError::domain_format(
                "pesel_birth_date",
                self.locale.messages().pesel_birth_date,
            )
        };

        let two = |i: usize| digits[i] * 10 + digits[i + 1];
        let (year, month, day) = (two(0), two(2), two(4));

        // The century is folded into the month field.
        let (century, month) = match month {
            81..=92 => (1800, month - 80),
            1..=12 => (1900, month),
            21..=32 => (2000, month - 20),
            41..=52 => (2100, month - 40),
            61..=72 => (2200, month - 60),
            _ => return Err(invalid_date()),
        };
        let year = i32::try_from(century + year).map_err(|_| invalid_date())?;
        let birth_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid_date)?;

        let sex = if digits[9] % 2 == 1 {
            Sex::Male
        } else {
            Sex::Female
        };

        Ok(PeselDetails { birth_date, sex })
    }
}

impl Validate for Pesel {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.checked_digits(input).map(|_| ())
    }
}

/// Sex encoded in the tenth PESEL digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
}

/// Personal data encoded in a PESEL number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeselDetails {
    pub birth_date: NaiveDate,
    pub sex: Sex,
}

/// Creates a PESEL validator.
#[must_use]
pub fn pesel() -> Pesel {
    Pesel::new()
}

/// Validates a PESEL number with Polish messages.
pub fn validate_pesel(input: &str) -> Result<(), ValidationError> {
    pesel().validate(input)
}

/// Validates a PESEL number and decodes its birth date and sex.
pub fn decode_pesel(input: &str) -> Result<PeselDetails, ValidationError> {
    pesel().decode(input)
}

// ============================================================================
// NIP
// ============================================================================

/// Validates NIP numbers (10 digits, mod-11 weighted control digit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nip {
    locale: Locale,
}

impl Nip {
    /// Creates a NIP validator with Polish messages.
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

impl Validate for Nip {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let messages = self.locale.messages();
        let digits = parse_digits::<NIP_LENGTH>(input)
            .ok_or_else(|| ValidationError::domain_format("nip_format", messages.nip_format))?;

        let (body, check) = digits.split_at(NIP_LENGTH - 1);
        // A control value of 10 is compared like any other and never matches.
        let expected = nip_control(body);
        if expected != check[0] {
            return Err(
                ValidationError::domain_checksum("nip_checksum", messages.nip_checksum)
                    .with_param("expected", expected.to_string())
                    .with_param("actual", check[0].to_string()),
            );
        }
        Ok(())
    }
}

/// Creates a NIP validator.
#[must_use]
pub fn nip() -> Nip {
    Nip::new()
}

/// Validates a NIP number with Polish messages.
pub fn validate_nip(input: &str) -> Result<(), ValidationError> {
    nip().validate(input)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use rstest::rstest;

    mod pesel {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_known_valid() {
            assert!(validate_pesel("44051401359").is_ok());
            assert!(validate_pesel("02070803628").is_ok());
        }

        #[test]
        fn test_bad_checksum() {
            let error = validate_pesel("12345678901").unwrap_err();
            assert_eq!(error.kind, ErrorKind::DomainChecksumFailure);
            assert_eq!(error.message(), "Nieprawidłowy numer PESEL");
            assert_eq!(error.param("expected"), Some("3"));
            assert_eq!(error.param("actual"), Some("1"));
        }

        #[rstest]
        #[case("")]
        #[case("4405140135")]
        #[case("440514013590")]
        #[case("4405140135a")]
        #[case("44051 01359")]
        #[case("４4051401359")]
        fn rejects_format(#[case] input: &str) {
            let error = validate_pesel(input).unwrap_err();
            assert_eq!(error.kind, ErrorKind::DomainFormatFailure);
            assert_eq!(error.message(), "PESEL musi składać się z 11 cyfr");
        }

        #[test]
        fn test_control_digit() {
            assert_eq!(pesel_control_digit("4405140135"), Some(9));
            assert_eq!(pesel_control_digit("440514013"), None);
            assert_eq!(pesel_control_digit("44051401x5"), None);
        }

        #[test]
        fn test_decode() {
            let details = decode_pesel("44051401359").unwrap();
            assert_eq!(details.birth_date, NaiveDate::from_ymd_opt(1944, 5, 14).unwrap());
            assert_eq!(details.sex, Sex::Male);

            let details = decode_pesel("02270803624").unwrap();
            assert_eq!(details.birth_date, NaiveDate::from_ymd_opt(2002, 7, 8).unwrap());
            assert_eq!(details.sex, Sex::Female);
        }

        #[test]
        fn test_decode_rejects_impossible_date() {
            // month 13 with a correct control digit
            let body = "4413140135";
            let control = pesel_control_digit(body).unwrap();
            let input = format!("{body}{control}");

            assert!(validate_pesel(&input).is_ok());
            let error = decode_pesel(&input).unwrap_err();
            assert_eq!(error.code, "pesel_birth_date");
        }

        #[test]
        fn test_decode_propagates_checksum_failure() {
            let error = decode_pesel("12345678901").unwrap_err();
            assert_eq!(error.kind, ErrorKind::DomainChecksumFailure);
        }
    }

    mod nip {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_known_valid() {
            assert!(validate_nip("1234563218").is_ok());
        }

        #[test]
        fn test_bad_checksum() {
            let error = validate_nip("1234567890").unwrap_err();
            assert_eq!(error.kind, ErrorKind::DomainChecksumFailure);
            assert_eq!(error.message(), "Nieprawidłowy numer NIP");
        }

        #[test]
        fn test_control_value_ten_never_matches() {
            // 123456789 sums to 230, 230 mod 11 == 10
            assert_eq!(nip_control_digit("123456789"), Some(10));
            for last in 0..=9 {
                let input = format!("123456789{last}");
                assert_eq!(
                    validate_nip(&input).unwrap_err().kind,
                    ErrorKind::DomainChecksumFailure
                );
            }
        }

        #[rstest]
        #[case("")]
        #[case("123456321")]
        #[case("12345632189")]
        #[case("123-456-32-18")]
        #[case("PL1234563218")]
        fn rejects_format(#[case] input: &str) {
            let error = validate_nip(input).unwrap_err();
            assert_eq!(error.kind, ErrorKind::DomainFormatFailure);
            assert_eq!(error.message(), "NIP musi składać się z 10 cyfr");
        }

        #[test]
        fn test_english_locale() {
            let error = nip().locale(Locale::English).validate("12").unwrap_err();
            assert_eq!(error.message(), "NIP must consist of 10 digits");
        }
    }
}
