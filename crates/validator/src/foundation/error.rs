//! Error types for validation failures
//!
//! Every failure the engine reports is a [`ValidationError`]: a stable
//! machine-readable `code`, the [`ErrorKind`] it belongs to, the
//! user-facing `message` and optional template parameters.
//!
//! String fields use `Cow<'static, str>` so that fixed catalog messages
//! never allocate.

use std::borrow::Cow;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Which stage of validation produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field was absent or empty.
    MissingRequired,
    /// Value was shorter than `min_length` or longer than `max_length`.
    LengthViolation,
    /// Value did not match the rule's regular expression.
    PatternMismatch,
    /// A caller-supplied custom check rejected the value.
    CustomRuleFailure,
    /// A domain validator's structural precondition failed.
    DomainFormatFailure,
    /// Format was correct but the control digit did not match.
    DomainChecksumFailure,
}

impl ErrorKind {
    /// Returns `true` for failures produced by a domain validator.
    #[must_use]
    pub fn is_domain(self) -> bool {
        matches!(
            self,
            ErrorKind::DomainFormatFailure | ErrorKind::DomainChecksumFailure
        )
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// `Display` renders only the message, which is what a form shows next to
/// the offending field.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::min_length("Minimalna długość to 5 znaków", 5, 4)
///     .with_field("name");
///
/// assert_eq!(error.kind, ErrorKind::LengthViolation);
/// assert_eq!(error.param("min"), Some("5"));
/// assert_eq!(error.to_string(), "Minimalna długość to 5 znaków");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Taxonomy bucket of this failure.
    pub kind: ErrorKind,

    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "min_length", "pesel_checksum"
    pub code: Cow<'static, str>,

    /// Message in the locale that produced it.
    pub message: Cow<'static, str>,

    /// Field the error is attached to, set by the form validator.
    pub field: Option<Cow<'static, str>>,

    /// Ordered template parameters, e.g. `[("min", "5"), ("actual", "3")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a template parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::MissingRequired, "required", message)
    }

    /// Creates a "min_length" error.
    pub fn min_length(message: impl Into<Cow<'static, str>>, min: usize, actual: usize) -> Self {
        Self::new(ErrorKind::LengthViolation, "min_length", message)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(message: impl Into<Cow<'static, str>>, max: usize, actual: usize) -> Self {
        Self::new(ErrorKind::LengthViolation, "max_length", message)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error for a rule pattern mismatch.
    pub fn invalid_format(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::PatternMismatch, "invalid_format", message)
    }

    /// Creates a "custom" error carrying a caller-supplied message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::CustomRuleFailure, "custom", message)
    }

    /// Creates a domain format error, e.g. `pesel_format`.
    pub fn domain_format(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::DomainFormatFailure, code, message)
    }

    /// Creates a domain checksum error, e.g. `nip_checksum`.
    pub fn domain_checksum(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::DomainChecksumFailure, code, message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let error = ValidationError::required("To pole jest wymagane").with_field("email");
        assert_eq!(error.to_string(), "To pole jest wymagane");
        assert_eq!(error.field.as_deref(), Some("email"));
    }

    #[test]
    fn test_length_params() {
        let error = ValidationError::max_length("too long", 10, 12);
        assert_eq!(error.kind, ErrorKind::LengthViolation);
        assert_eq!(error.param("max"), Some("10"));
        assert_eq!(error.param("actual"), Some("12"));
        assert_eq!(error.param("min"), None);
    }

    #[test]
    fn test_domain_kinds() {
        assert!(ValidationError::domain_format("nip_format", "x").kind.is_domain());
        assert!(ValidationError::domain_checksum("nip_checksum", "x").kind.is_domain());
        assert!(!ValidationError::custom("x").kind.is_domain());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::invalid_format("Nieprawidłowy format");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
