//! Declarative rule set for a single field.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Validate, ValidationError};
use crate::rules::field::string_form;

/// Caller-supplied check, run after every built-in check has passed.
///
/// It receives the original value, not its string form.
pub type CustomCheck = dyn Fn(&Value) -> Result<(), ValidationError> + Send + Sync;

/// Constraints bound to one named field.
///
/// Every constraint is optional; a rule with none of them accepts anything.
/// Checks always run in the order `required`, `min_length`, `max_length`,
/// `pattern`, `custom`, whatever order the builder methods were called in.
///
/// # Examples
///
/// ```
/// use formcheck_validator::rules::{ValidationRule, validate_field};
/// use serde_json::json;
///
/// let rule = ValidationRule::new().required().min_length(5);
///
/// let error = validate_field(Some(&json!("test")), &rule).unwrap_err();
/// assert_eq!(error.message(), "Minimalna długość to 5 znaków");
/// assert!(validate_field(Some(&json!("testing")), &rule).is_ok());
/// ```
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub(crate) required: bool,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) pattern: Option<Regex>,
    pub(crate) custom: Option<Arc<CustomCheck>>,
}

impl ValidationRule {
    /// Creates an empty rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field as required: absent, `null` and `""` are rejected.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum length in characters.
    ///
    /// Characters are Unicode scalar values, so `"😀"` has length 1 even
    /// though it takes two UTF-16 units.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length in characters, counted like
    /// [`min_length`](Self::min_length).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets the pattern the string form of the value must match.
    ///
    /// The pattern is not anchored implicitly; use `^...$` for a full match.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compiles `pattern` and sets it.
    pub fn try_pattern(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.pattern(Regex::new(pattern)?))
    }

    /// Sets the custom check. A later call replaces an earlier one.
    ///
    /// Panics raised by the check are not caught.
    #[must_use = "builder methods must be chained or built"]
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(check));
        self
    }

    /// Uses a string validator as the custom check.
    ///
    /// The validator sees the same string form as the length and pattern
    /// checks.
    ///
    /// ```
    /// use formcheck_validator::rules::{ValidationRule, validate_field};
    /// use formcheck_validator::validators::pesel;
    /// use serde_json::json;
    ///
    /// let rule = ValidationRule::new().required().validator(pesel());
    /// assert!(validate_field(Some(&json!("44051401359")), &rule).is_ok());
    /// assert!(validate_field(Some(&json!("44051401358")), &rule).is_err());
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn validator<V>(self, validator: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.custom(move |value| validator.validate(&string_form(value)))
    }

    /// Returns `true` if the field is required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Configured minimum length.
    #[must_use]
    pub fn min(&self) -> Option<usize> {
        self.min_length
    }

    /// Configured maximum length.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.max_length
    }

    /// Configured pattern.
    #[must_use]
    pub fn regex(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    /// Returns `true` if a custom check is set.
    #[must_use]
    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.as_ref().map(|_| "<function>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rule() {
        let rule = ValidationRule::new();
        assert!(!rule.is_required());
        assert_eq!(rule.min(), None);
        assert_eq!(rule.max(), None);
        assert!(rule.regex().is_none());
        assert!(!rule.has_custom());
    }

    #[test]
    fn test_builder() {
        let rule = ValidationRule::new()
            .required()
            .min_length(2)
            .max_length(10)
            .try_pattern(r"^[a-z]+$")
            .unwrap()
            .custom(|_| Ok(()));

        assert!(rule.is_required());
        assert_eq!(rule.min(), Some(2));
        assert_eq!(rule.max(), Some(10));
        assert_eq!(rule.regex().map(Regex::as_str), Some(r"^[a-z]+$"));
        assert!(rule.has_custom());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(ValidationRule::new().try_pattern("(unclosed").is_err());
    }

    #[test]
    fn test_debug_hides_closure() {
        let rule = ValidationRule::new().custom(|_| Ok(()));
        let debug = format!("{rule:?}");
        assert!(debug.contains("<function>"));
    }

    #[test]
    fn test_clone_shares_custom_check() {
        let rule = ValidationRule::new().custom(|_| Err(ValidationError::custom("nope")));
        let cloned = rule.clone();
        let original = rule.custom.as_ref().unwrap();
        let copy = cloned.custom.as_ref().unwrap();
        assert!(Arc::ptr_eq(original, copy));
    }
}
