//! Prelude module for convenient imports.
//!
//! `use formcheck_validator::prelude::*;` brings in the traits, error types,
//! rule registry and every built-in validator.

pub use crate::foundation::{ErrorKind, Locale, Validate, ValidationError};

pub use crate::rules::{
    Format, FormSpec, FormValidator, RuleSpec, SpecError, ValidationReport, ValidationRule,
    validate_field, validate_field_in,
};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
