//! Core traits for the validation system
//!
//! This module defines the trait every validator implements.

use crate::foundation::validatable::AsValidatable;
use crate::foundation::ValidationError;
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are plain values carrying their configuration; `validate` is a
/// pure check that either accepts the input or returns a typed failure.
///
/// # Examples
///
/// ```
/// use badge_validator::foundation::{ErrorKind, Validate, ValidationError};
///
/// struct NonBlank;
///
/// impl Validate for NonBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new(ErrorKind::Regexp, "blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonBlank.validate("x").is_ok());
/// assert!(NonBlank.validate("  ").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates any type that can be viewed as `Self::Input`.
    ///
    /// Lets a `str` validator accept a raw JSON record value without the
    /// caller converting first. Values of the wrong shape fail with
    /// [`ErrorKind::TypeMismatch`](crate::foundation::ErrorKind::TypeMismatch).
    ///
    /// ```
    /// use badge_validator::foundation::Validate;
    /// use badge_validator::validators::max_length;
    /// use serde_json::json;
    ///
    /// let v = max_length(3);
    /// assert!(v.validate_any(&json!("abc")).is_ok());
    /// assert!(v.validate_any(&json!("abcd")).is_err());
    /// assert!(v.validate_any(&json!(12)).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
    }

    #[test]
    fn test_validate_any_accepts_json_string() {
        assert!(AlwaysValid.validate_any(&serde_json::json!("test")).is_ok());
    }

    #[test]
    fn test_validate_any_rejects_non_string_json() {
        let err = AlwaysValid
            .validate_any(&serde_json::json!(true))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.param("actual"), Some("boolean"));
    }
}
