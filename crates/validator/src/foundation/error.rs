//! Error types for validation failures
//!
//! A [`ValidationError`] is what a single validator returns when it rejects
//! its input. The model evaluation loop turns these into per-field
//! [`ErrorEntry`](crate::model::ErrorEntry) values; they never cross the
//! `Model::errors` boundary as `Err`.
//!
//! String fields use `Cow<'static, str>` so the common case of static
//! messages does not allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed set of failure kinds a field can report.
///
/// The string forms (`"missing"`, `"regexp"`, ...) are the values that appear
/// in serialized error entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// A required field was absent or falsy.
    #[cfg_attr(feature = "serde", serde(rename = "missing"))]
    Missing,
    /// A pattern-based validator (pattern, email, URL) did not match.
    #[cfg_attr(feature = "serde", serde(rename = "regexp"))]
    Regexp,
    /// The value did not parse as an ISO-8601 date or date-time.
    #[cfg_attr(feature = "serde", serde(rename = "isodate"))]
    IsoDate,
    /// The value was longer than the configured maximum.
    #[cfg_attr(feature = "serde", serde(rename = "length"))]
    Length,
    /// The value had a JSON type the validator cannot measure.
    #[cfg_attr(feature = "serde", serde(rename = "type_mismatch"))]
    TypeMismatch,
}

impl ErrorKind {
    /// Returns the wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Missing => "missing",
            ErrorKind::Regexp => "regexp",
            ErrorKind::IsoDate => "isodate",
            ErrorKind::Length => "length",
            ErrorKind::TypeMismatch => "type_mismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use badge_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::Length, "Must be at most 3 characters")
///     .with_param("max", "3")
///     .with_param("actual", "5");
///
/// assert_eq!(error.kind, ErrorKind::Length);
/// assert_eq!(error.param("actual"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Failure kind, reported in the field's error entry.
    pub kind: ErrorKind,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value context (typically 0-3 entries).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
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

    /// Returns the wire name of the failure kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a `regexp` error for a pattern that did not match.
    pub fn regexp(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Regexp, "Value does not match the expected pattern")
            .with_param("expected", expected)
    }

    /// Creates a `length` error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(ErrorKind::Length, format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an `isodate` error.
    pub fn iso_date(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::IsoDate, "Value is not a valid ISO-8601 date")
            .with_param("reason", reason)
    }

    /// Creates a `type_mismatch` error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self::new(
            ErrorKind::TypeMismatch,
            format!("Expected {expected}, got {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new(ErrorKind::Regexp, "Test error");
        assert_eq!(error.kind, ErrorKind::Regexp);
        assert_eq!(error.message, "Test error");
        assert_eq!(error.code(), "regexp");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::max_length(5, 7);
        assert_eq!(error.param("max"), Some("5"));
        assert_eq!(error.param("actual"), Some("7"));
        assert_eq!(error.param("min"), None);
    }

    #[test]
    fn test_display() {
        let error = ValidationError::max_length(1, 2);
        assert_eq!(
            error.to_string(),
            "length: Must be at most 1 characters (params: [max=1, actual=2])"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = ValidationError::type_mismatch("string", "number");
        assert_eq!(error.kind, ErrorKind::TypeMismatch);
        assert_eq!(error.message, "Expected string, got number");
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new(ErrorKind::Missing, "This field is required");
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(ErrorKind::Missing.as_str(), "missing");
        assert_eq!(ErrorKind::IsoDate.to_string(), "isodate");
        assert_eq!(ErrorKind::TypeMismatch.to_string(), "type_mismatch");
    }
}
