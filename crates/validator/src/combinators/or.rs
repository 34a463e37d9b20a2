//! OR combinator - try one validator, fall back to another
//!
//! [`Or`] accepts the input if either side accepts it. The left side is
//! tried first and the right side only runs when the left fails. When both
//! fail, the right side's error is returned unchanged, so the fallback
//! determines the reported failure kind.
//!
//! ```
//! use badge_validator::combinators::or;
//! use badge_validator::foundation::Validate;
//! use badge_validator::validators::max_length;
//!
//! let validator = or(max_length(2), max_length(4));
//! assert!(validator.validate("ab").is_ok());
//! assert!(validator.validate("abcd").is_ok());
//!
//! let err = validator.validate("abcdef").unwrap_err();
//! assert_eq!(err.param("max"), Some("4"));
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR, reporting the fallback's error.
///
/// # Type Parameters
///
/// * `L` - The validator tried first
/// * `R` - The fallback validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => {
                tracing::trace!(error = %left_error, "primary alternative failed, trying fallback");
                self.right.validate(input)
            }
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
