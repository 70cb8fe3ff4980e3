//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//! - **Messages**: [`Locale`], [`Messages`]
//!
//! Every validator in this crate reports failure as data. A
//! [`ValidationError`] carries the taxonomy bucket ([`ErrorKind`]), a stable
//! code for programmatic handling and the message in the selected locale:
//!
//! ```
//! use formcheck_validator::foundation::{ErrorKind, Validate};
//! use formcheck_validator::validators::pesel;
//!
//! let error = pesel().validate("12345678901").unwrap_err();
//! assert_eq!(error.kind, ErrorKind::DomainChecksumFailure);
//! assert_eq!(error.code, "pesel_checksum");
//! ```

pub mod error;
pub mod locale;
pub mod traits;

pub use error::{ErrorKind, ValidationError};
pub use locale::{Locale, Messages};
pub use traits::Validate;
