//! Rule registry and aggregate validation.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::foundation::{Locale, ValidationError};
use crate::rules::{ValidationRule, validate_field_in};

// ============================================================================
// FORM VALIDATOR
// ============================================================================

/// Owns the rules of one form and validates records against them.
///
/// Fields are kept in registration order. Only registered fields are ever
/// validated: extra keys in the record are ignored and registered fields
/// missing from it are treated as not provided.
///
/// # Examples
///
/// ```
/// use formcheck_validator::rules::{FormValidator, ValidationRule};
/// use serde_json::json;
///
/// let validator = FormValidator::new()
///     .field("name", ValidationRule::new().required().min_length(5))
///     .field("email", ValidationRule::new().required());
///
/// let values = json!({ "name": "Jo", "email": "" });
/// let report = validator.validate(values.as_object().unwrap());
///
/// assert!(!report.is_valid());
/// assert_eq!(report.message("name"), Some("Minimalna długość to 5 znaków"));
/// assert_eq!(report.message("email"), Some("To pole jest wymagane"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    rules: IndexMap<String, ValidationRule>,
    locale: Locale,
}

impl FormValidator {
    /// Creates an empty validator with Polish messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Registers a field, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        self.add_field(name, rule);
        self
    }

    /// Registers `rule` for `name`, replacing and returning any previous rule.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        rule: ValidationRule,
    ) -> Option<ValidationRule> {
        let name = name.into();
        debug!(field = %name, ?rule, "registering field");
        self.rules.insert(name, rule)
    }

    /// Unregisters `name`. Removing an unknown field is a no-op.
    pub fn remove_field(&mut self, name: &str) -> Option<ValidationRule> {
        let removed = self.rules.shift_remove(name);
        debug!(field = name, removed = removed.is_some(), "removing field");
        removed
    }

    /// Validates every registered field of `values`.
    ///
    /// Always returns a fresh report; the validator itself is not modified.
    pub fn validate(&self, values: &Map<String, Value>) -> ValidationReport {
        let mut errors = IndexMap::new();

        for (name, rule) in &self.rules {
            match validate_field_in(self.locale, values.get(name), rule) {
                Ok(()) => trace!(field = %name, "field valid"),
                Err(error) => {
                    trace!(field = %name, code = %error.code, "field invalid");
                    errors.insert(name.clone(), error.with_field(name.clone()));
                }
            }
        }

        debug!(
            fields = self.rules.len(),
            failed = errors.len(),
            "form validated"
        );
        ValidationReport { errors }
    }

    /// Validates a single registered field.
    ///
    /// An unregistered field is always valid.
    pub fn validate_value(&self, name: &str, value: Option<&Value>) -> Result<(), ValidationError> {
        match self.rules.get(name) {
            Some(rule) => validate_field_in(self.locale, value, rule)
                .map_err(|error| error.with_field(name.to_owned())),
            None => Ok(()),
        }
    }

    /// Rule registered for `name`.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&ValidationRule> {
        self.rules.get(name)
    }

    /// Returns `true` if `name` has a rule.
    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no field is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Message locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// Outcome of one [`FormValidator::validate`] call.
///
/// Holds at most one error per failed field. Validity is derived from the
/// error map, so `is_valid()` and `errors().is_empty()` always agree.
///
/// Serializes as `{"isValid": bool, "errors": {field: message}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: IndexMap<String, ValidationError>,
}

impl ValidationReport {
    /// Returns `true` if no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors keyed by field name.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<String, ValidationError> {
        &self.errors
    }

    /// Error for `field`, if it failed.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(ValidationError::message)
    }

    /// `(field, message)` pairs of all failures.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.message()))
    }

    /// Converts into the bare error map.
    #[must_use]
    pub fn into_errors(self) -> IndexMap<String, ValidationError> {
        self.errors
    }
}

struct MessageMap<'a>(&'a IndexMap<String, ValidationError>);

impl Serialize for MessageMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in self.0 {
            map.serialize_entry(field, error.message())?;
        }
        map.end()
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &MessageMap(&self.errors))?;
        state.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
