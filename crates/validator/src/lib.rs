//! # formcheck-validator
//!
//! Field-level validation for form data: a registry of declarative
//! per-field rules plus pure domain validators for e-mail addresses, phone
//! numbers, password strength, Polish postal codes and the PESEL / NIP
//! checksum identifiers.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = FormValidator::new()
//!     .field("name", ValidationRule::new().required().min_length(2))
//!     .field("pesel", ValidationRule::new().required().validator(pesel()));
//!
//! let values = json!({ "name": "Anna", "pesel": "44051401359" });
//! assert!(validator.validate(values.as_object().unwrap()).is_valid());
//! ```
//!
//! ## Standalone validators
//!
//! ```
//! use formcheck_validator::validators::{validate_nip, validate_password};
//!
//! assert!(validate_nip("1234563218").is_ok());
//! assert_eq!(
//!     validate_password("weak").unwrap_err().message(),
//!     "Hasło musi mieć co najmniej 8 znaków",
//! );
//! ```
//!
//! Failures are always returned as [`ValidationError`](foundation::ValidationError)
//! values; nothing in this crate panics on bad input.

pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;
