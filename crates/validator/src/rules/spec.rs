//! Serializable rule definitions.
//!
//! Forms can be described in configuration instead of code:
//!
//! ```
//! use formcheck_validator::rules::FormSpec;
//! use serde_json::json;
//!
//! let spec: FormSpec = serde_json::from_value(json!({
//!     "locale": "pl",
//!     "fields": {
//!         "pesel": { "required": true, "format": "pesel" },
//!         "zip": { "pattern": "^[0-9]{2}-[0-9]{3}$" }
//!     }
//! }))
//! .unwrap();
//!
//! let validator = spec.build().unwrap();
//! let report = validator.validate(json!({ "pesel": "12345678901" }).as_object().unwrap());
//! assert_eq!(report.message("pesel"), Some("Nieprawidłowy numer PESEL"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::{Locale, Validate, ValidationError};
use crate::rules::{FormValidator, ValidationRule};
use crate::validators::{Email, Nip, Password, Pesel, Phone, PolishPostalCode};

/// Error raised while turning a [`FormSpec`] into a [`FormValidator`].
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("invalid pattern for field `{field}`: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}

/// Domain validator that can be named in a [`RuleSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    Email,
    Phone,
    Password,
    PostalCode,
    Pesel,
    Nip,
}

impl Format {
    /// Attaches the matching domain validator as the rule's custom check.
    fn apply(self, rule: ValidationRule, locale: Locale) -> ValidationRule {
        match self {
            Format::Email => rule.validator(Email::new().locale(locale)),
            Format::Phone => rule.validator(Phone::new().locale(locale)),
            Format::Password => rule.validator(Password::new().locale(locale)),
            Format::PostalCode => rule.validator(PolishPostalCode::new().locale(locale)),
            Format::Pesel => rule.validator(Pesel::new().locale(locale)),
            Format::Nip => rule.validator(Nip::new().locale(locale)),
        }
    }

    /// Validates `input` with the matching domain validator.
    pub fn check(self, input: &str, locale: Locale) -> Result<(), ValidationError> {
        match self {
            Format::Email => Email::new().locale(locale).validate(input),
            Format::Phone => Phone::new().locale(locale).validate(input),
            Format::Password => Password::new().locale(locale).validate(input),
            Format::PostalCode => PolishPostalCode::new().locale(locale).validate(input),
            Format::Pesel => Pesel::new().locale(locale).validate(input),
            Format::Nip => Nip::new().locale(locale).validate(input),
        }
    }
}

/// Configuration form of a [`ValidationRule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RuleSpec {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

impl RuleSpec {
    /// Builds the rule, compiling the pattern if one is set.
    pub fn build(&self, field: &str, locale: Locale) -> Result<ValidationRule, SpecError> {
        let mut rule = ValidationRule::new();
        if self.required {
            rule = rule.required();
        }
        if let Some(min) = self.min_length {
            rule = rule.min_length(min);
        }
        if let Some(max) = self.max_length {
            rule = rule.max_length(max);
        }
        if let Some(pattern) = &self.pattern {
            rule = rule
                .try_pattern(pattern)
                .map_err(|source| SpecError::InvalidPattern {
                    field: field.to_owned(),
                    source,
                })?;
        }
        if let Some(format) = self.format {
            rule = format.apply(rule, locale);
        }
        Ok(rule)
    }
}

/// Configuration form of a whole [`FormValidator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormSpec {
    pub locale: Locale,
    pub fields: IndexMap<String, RuleSpec>,
}

impl FormSpec {
    /// Builds a validator with one rule per configured field.
    pub fn build(&self) -> Result<FormValidator, SpecError> {
        let mut validator = FormValidator::new().with_locale(self.locale);
        for (name, spec) in &self.fields {
            validator.add_field(name.clone(), spec.build(name, self.locale)?);
        }
        Ok(validator)
    }
}

impl TryFrom<&FormSpec> for FormValidator {
    type Error = SpecError;

    fn try_from(spec: &FormSpec) -> Result<Self, Self::Error> {
        spec.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case() {
        let spec: RuleSpec = serde_json::from_value(json!({
            "required": true,
            "minLength": 2,
            "maxLength": 4,
            "format": "postalCode"
        }))
        .unwrap();

        assert_eq!(
            spec,
            RuleSpec {
                required: true,
                min_length: Some(2),
                max_length: Some(4),
                pattern: None,
                format: Some(Format::PostalCode),
            }
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = serde_json::from_value::<RuleSpec>(json!({ "min_length": 2 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_pattern() {
        let spec = FormSpec {
            locale: Locale::Polish,
            fields: IndexMap::from([(
                "code".to_owned(),
                RuleSpec {
                    pattern: Some("([".to_owned()),
                    ..RuleSpec::default()
                },
            )]),
        };

        let error = spec.build().unwrap_err();
        assert!(matches!(&error, SpecError::InvalidPattern { field, .. } if field == "code"));
        assert!(error.to_string().starts_with("invalid pattern for field `code`"));
    }

    #[test]
    fn test_format_is_custom_check() {
        let rule = RuleSpec {
            format: Some(Format::Nip),
            ..RuleSpec::default()
        }
        .build("nip", Locale::English)
        .unwrap();

        assert!(rule.has_custom());
        let error = crate::rules::validate_field(Some(&json!("1234567890")), &rule).unwrap_err();
        assert_eq!(error.kind, ErrorKind::DomainChecksumFailure);
        assert_eq!(error.message(), "Invalid NIP number");
    }

    #[test]
    fn test_format_check() {
        assert!(Format::Email.check("a@b.pl", Locale::Polish).is_ok());
        assert!(Format::PostalCode.check("12345", Locale::Polish).is_err());
    }

    #[test]
    fn test_try_from() {
        let spec: FormSpec = serde_json::from_value(json!({
            "fields": { "email": { "required": true, "format": "email" } }
        }))
        .unwrap();

        let validator = FormValidator::try_from(&spec).unwrap();
        assert_eq!(validator.locale(), Locale::Polish);
        assert!(validator.contains_field("email"));
    }
}
