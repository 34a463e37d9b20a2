//! Conversions from raw record values to validator inputs
//!
//! Records are untyped JSON. This module holds the [`AsValidatable`] trait
//! (a GAT-based view of a value as a validator's `Input`), plus the two
//! coercions the model loop relies on: truthiness and stringification.

use crate::foundation::ValidationError;
use serde_json::Value;
use std::borrow::{Borrow, Cow};

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be viewed as a validator's input.
///
/// The GAT lets implementations return either a borrow or an owned value,
/// unified through `Borrow<T>`. A JSON string value views as `str`; any
/// other JSON value fails with a type mismatch.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

impl AsValidatable<str> for Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(ValidationError::type_mismatch(
                "string",
                json_type_name(other),
            )),
        }
    }
}

// ============================================================================
// JSON COERCIONS
// ============================================================================

/// Returns a human-readable type name for a JSON value.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Loose truthiness used for required-field checks.
///
/// `null`, `false`, numeric zero and the empty string are falsy; every
/// array and object (even empty ones) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a value as the text a pattern validator matches against.
///
/// Strings pass through borrowed. Numbers and booleans use their JSON text,
/// `null` becomes `"null"`, arrays are comma-joined element by element and
/// objects collapse to `"[object Object]"`.
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => Cow::Owned(i.to_string()),
            (None, Some(u), _) => Cow::Owned(u.to_string()),
            (None, None, Some(f)) => Cow::Owned(f.to_string()),
            (None, None, None) => Cow::Owned(n.to_string()),
        },
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => Cow::Borrowed(""),
                    other => stringify(other),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn string_value_borrows() {
        let value = json!("hello");
        let s = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert_eq!(s, "hello");
    }

    #[test]
    fn non_string_value_is_type_mismatch() {
        let err = AsValidatable::<str>::as_validatable(&json!(42)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.param("expected"), Some("string"));
        assert_eq!(err.param("actual"), Some("number"));
    }

    #[rstest]
    #[case(json!(null), false)]
    #[case(json!(false), false)]
    #[case(json!(0), false)]
    #[case(json!(0.0), false)]
    #[case(json!(""), false)]
    #[case(json!(true), true)]
    #[case(json!(-1), true)]
    #[case(json!(" "), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_truthy(&value), expected);
    }

    #[rstest]
    #[case(json!("text"), "text")]
    #[case(json!(null), "null")]
    #[case(json!(true), "true")]
    #[case(json!(42), "42")]
    #[case(json!(1.5), "1.5")]
    #[case(json!(["a", 1, null]), "a,1,")]
    #[case(json!({"k": "v"}), "[object Object]")]
    fn stringification(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(stringify(&value), expected);
    }

    #[test]
    fn stringify_borrows_strings() {
        let value = json!("borrowed");
        assert!(matches!(stringify(&value), Cow::Borrowed(_)));
    }
}
