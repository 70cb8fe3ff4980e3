//! Single-field evaluation pipeline.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Locale, ValidationError};
use crate::rules::ValidationRule;

/// Returns `true` for values treated as "not provided": absent, `null` or
/// the empty string. Whitespace-only strings are provided.
#[must_use]
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// String form of a value, as seen by the length and pattern checks.
///
/// Strings are used as-is. Numbers use their shortest display form, so an
/// integral float such as `1.0` reads `"1"`. Arrays join the string forms of
/// their elements with `,` (`[1, 2]` reads `"1,2"`, `null` elements are
/// empty). Objects use their compact JSON encoding.
#[must_use]
pub fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => Cow::Owned(f.to_string()),
            _ => Cow::Owned(n.to_string()),
        },
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(string_form)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Validates one value against one rule with Polish messages.
///
/// See [`validate_field_in`].
pub fn validate_field(value: Option<&Value>, rule: &ValidationRule) -> Result<(), ValidationError> {
    validate_field_in(Locale::Polish, value, rule)
}

/// Validates one value against one rule.
///
/// A missing value fails only when the rule is required; otherwise it is
/// valid and no other check runs. A present value goes through
/// `min_length`, `max_length`, `pattern` and finally the custom check,
/// stopping at the first failure. The custom check's error is returned
/// unchanged.
pub fn validate_field_in(
    locale: Locale,
    value: Option<&Value>,
    rule: &ValidationRule,
) -> Result<(), ValidationError> {
    let messages = locale.messages();

    let value = match value {
        Some(value) if !is_missing(Some(value)) => value,
        _ if rule.required => return Err(ValidationError::required(messages.required)),
        _ => return Ok(()),
    };

    let text = string_form(value);
    let length = text.chars().count();

    if let Some(min) = rule.min_length
        && length < min
    {
        return Err(ValidationError::min_length(messages.min_length(min), min, length));
    }

    if let Some(max) = rule.max_length
        && length > max
    {
        return Err(ValidationError::max_length(messages.max_length(max), max, length));
    }

    if let Some(pattern) = &rule.pattern
        && !pattern.is_match(&text)
    {
        return Err(ValidationError::invalid_format(messages.invalid_format));
    }

    match &rule.custom {
        Some(check) => check(value),
        None => Ok(()),
    }
}
