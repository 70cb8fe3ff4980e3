//! Declarative field rules and the form-level registry
//!
//! - [`ValidationRule`]: constraints for one field
//! - [`validate_field`] / [`validate_field_in`]: the ordered check pipeline
//! - [`FormValidator`] / [`ValidationReport`]: named rules and aggregate results
//! - [`FormSpec`] / [`RuleSpec`]: the same, loaded from configuration
//!
//! Values are [`serde_json::Value`]s, so records coming from a form
//! submission or a JSON body can be validated without conversion.

pub mod field;
pub mod form;
pub mod rule;
pub mod spec;

pub use field::{is_missing, string_form, validate_field, validate_field_in};
pub use form::{FormValidator, ValidationReport};
pub use rule::{CustomCheck, ValidationRule};
pub use spec::{Format, FormSpec, RuleSpec, SpecError};
