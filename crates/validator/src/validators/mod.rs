//! Built-in domain validators
//!
//! Each validator is a stateless [`Validate`](crate::foundation::Validate)
//! type over `str`, with a factory function and a standalone
//! `validate_*` shortcut that uses Polish messages.
//!
//! | Validator | Factory | Shortcut |
//! |-----------|---------|----------|
//! | [`Email`] | [`email`] | [`validate_email`] |
//! | [`Phone`] | [`phone`] | [`validate_phone`] |
//! | [`Password`] | [`password`] | [`validate_password`] |
//! | [`PolishPostalCode`] | [`polish_postal_code`] | [`validate_polish_postal_code`] |
//! | [`Pesel`] | [`pesel`] | [`validate_pesel`] |
//! | [`Nip`] | [`nip`] | [`validate_nip`] |

pub mod email;
pub mod national_id;
pub mod password;
pub mod phone;
pub mod postal_code;

pub use email::{Email, email, validate_email};
pub use national_id::{
    Nip, Pesel, PeselDetails, Sex, decode_pesel, nip, nip_control_digit, pesel,
    pesel_control_digit, validate_nip, validate_pesel,
};
pub use password::{MIN_PASSWORD_LENGTH, Password, password, validate_password};
pub use phone::{Phone, phone, validate_phone};
pub use postal_code::{PolishPostalCode, polish_postal_code, validate_polish_postal_code};
