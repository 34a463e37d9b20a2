//! Field-level validators over raw record values.
//!
//! Records are untyped JSON, while the built-in validators check `str`.
//! [`Validator`] is the closed set of validators a field can carry; it
//! converts the raw value into what its inner validator expects:
//!
//! - pattern, email and URL checks match against the stringified value
//! - max length measures strings (chars) and arrays (elements)
//! - ISO date requires a string

use serde_json::Value;

use crate::foundation::validatable::json_type_name;
use crate::foundation::{ErrorKind, Validate, ValidationError, stringify};
use crate::validators::{Email, IsoDate, MaxLength, Pattern, Url};

/// A configured validator attached to a model field.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Unanchored regular expression match.
    Pattern(Pattern),
    /// Upper bound on length.
    MaxLength(MaxLength),
    /// ISO 8601 date or date-time.
    IsoDate(IsoDate),
    /// Email address shape.
    Email(Email),
    /// Absolute http(s) URL or root-relative path.
    Url(Url),
}

impl Validator {
    /// Short name of the validator, used in log events.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Validator::Pattern(_) => "pattern",
            Validator::MaxLength(_) => "max_length",
            Validator::IsoDate(_) => "iso_date",
            Validator::Email(_) => "email",
            Validator::Url(_) => "url",
        }
    }
}

impl Validate for Validator {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match self {
            Validator::Pattern(v) => v.validate(&stringify(input)),
            Validator::Email(v) => v.validate(&stringify(input)),
            Validator::Url(v) => v.validate(&stringify(input)),
            Validator::MaxLength(v) => match input {
                Value::Array(items) => v.check_len(items.len()),
                other => v.validate_any(other),
            },
            Validator::IsoDate(v) => v.validate_any(input).map_err(|e| match e.kind {
                ErrorKind::TypeMismatch => ValidationError::iso_date("not a string")
                    .with_param("actual", json_type_name(input)),
                _ => e,
            }),
        }
    }
}

impl From<Pattern> for Validator {
    fn from(v: Pattern) -> Self {
        Validator::Pattern(v)
    }
}

impl From<MaxLength> for Validator {
    fn from(v: MaxLength) -> Self {
        Validator::MaxLength(v)
    }
}

impl From<IsoDate> for Validator {
    fn from(v: IsoDate) -> Self {
        Validator::IsoDate(v)
    }
}

impl From<Email> for Validator {
    fn from(v: Email) -> Self {
        Validator::Email(v)
    }
}

impl From<Url> for Validator {
    fn from(v: Url) -> Self {
        Validator::Url(v)
    }
}

// ============================================================================
// TESTS
// ============================================================================
