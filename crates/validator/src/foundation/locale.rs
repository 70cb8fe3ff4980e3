//! Fixed message catalogs.
//!
//! Messages are plain static strings selected by [`Locale`]. Length
//! messages carry a `{min}` / `{max}` placeholder that is interpolated with
//! the configured bound, identically in every locale.

use serde::{Deserialize, Serialize};

/// Language of the messages produced by validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Polish (default).
    #[default]
    #[serde(rename = "pl")]
    Polish,
    /// English.
    #[serde(rename = "en")]
    English,
}

/// Message table for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub required: &'static str,
    pub min_length: &'static str,
    pub max_length: &'static str,
    pub invalid_format: &'static str,
    pub invalid_email: &'static str,
    pub invalid_phone: &'static str,
    pub password_too_short: &'static str,
    pub password_lowercase: &'static str,
    pub password_uppercase: &'static str,
    pub password_digit: &'static str,
    pub invalid_postal_code: &'static str,
    pub pesel_format: &'static str,
    pub pesel_checksum: &'static str,
    pub pesel_birth_date: &'static str,
    pub nip_format: &'static str,
    pub nip_checksum: &'static str,
}

const POLISH: Messages = Messages {
    required: "To pole jest wymagane",
    min_length: "Minimalna długość to {min} znaków",
    max_length: "Maksymalna długość to {max} znaków",
    invalid_format: "Nieprawidłowy format",
    invalid_email: "Nieprawidłowy adres email",
    invalid_phone: "Nieprawidłowy numer telefonu",
    password_too_short: "Hasło musi mieć co najmniej 8 znaków",
    password_lowercase: "Hasło musi zawierać małą literę",
    password_uppercase: "Hasło musi zawierać wielką literę",
    password_digit: "Hasło musi zawierać cyfrę",
    invalid_postal_code: "Nieprawidłowy kod pocztowy (format: XX-XXX)",
    pesel_format: "PESEL musi składać się z 11 cyfr",
    pesel_checksum: "Nieprawidłowy numer PESEL",
    pesel_birth_date: "PESEL zawiera nieprawidłową datę urodzenia",
    nip_format: "NIP musi składać się z 10 cyfr",
    nip_checksum: "Nieprawidłowy numer NIP",
};

const ENGLISH: Messages = Messages {
    required: "This field is required",
    min_length: "Minimum length is {min} characters",
    max_length: "Maximum length is {max} characters",
    invalid_format: "Invalid format",
    invalid_email: "Invalid email address",
    invalid_phone: "Invalid phone number",
    password_too_short: "Password must be at least 8 characters long",
    password_lowercase: "Password must contain a lowercase letter",
    password_uppercase: "Password must contain an uppercase letter",
    password_digit: "Password must contain a digit",
    invalid_postal_code: "Invalid postal code (format: XX-XXX)",
    pesel_format: "PESEL must consist of 11 digits",
    pesel_checksum: "Invalid PESEL number",
    pesel_birth_date: "PESEL contains an invalid birth date",
    nip_format: "NIP must consist of 10 digits",
    nip_checksum: "Invalid NIP number",
};

impl Locale {
    /// Returns the message table for this locale.
    #[must_use]
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Polish => &POLISH,
            Locale::English => &ENGLISH,
        }
    }
}

impl Messages {
    /// Minimum-length message with the bound filled in.
    #[must_use]
    pub fn min_length(&self, min: usize) -> String {
        self.min_length.replace("{min}", &min.to_string())
    }

    /// Maximum-length message with the bound filled in.
    #[must_use]
    pub fn max_length(&self, max: usize) -> String {
        self.max_length.replace("{max}", &max.to_string())
    }
}
