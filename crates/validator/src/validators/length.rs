//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so accented and
//! non-Latin text counts the way a reader would count it.

use crate::foundation::ValidationError;

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    ///
    /// A string of exactly `max` characters is accepted.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Checks an already-measured length, e.g. the element count of an array.
    pub fn check_len(&self, len: usize) -> Result<(), ValidationError> {
        if len <= self.max {
            Ok(())
        } else {
            Err(ValidationError::max_length(self.max, len))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
