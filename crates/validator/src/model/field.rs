//! Field descriptors: a required flag plus an ordered validator list.

use crate::validators::Validator;

/// Rules for a single model field.
///
/// Built only through [`required`] or [`optional`]; there are no mutating
/// methods, so a descriptor never changes after construction.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    required: bool,
    validators: Vec<Validator>,
}

impl FieldDescriptor {
    /// Whether a falsy or absent value is reported as `missing`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Validators in declaration order.
    #[must_use]
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }
}

fn descriptor<I>(required: bool, validators: I) -> FieldDescriptor
where
    I: IntoIterator,
    I::Item: Into<Validator>,
{
    FieldDescriptor {
        required,
        validators: validators.into_iter().map(Into::into).collect(),
    }
}

/// Declares a required field checked by `validators`, in order.
///
/// ```
/// use badge_validator::model::required;
/// use badge_validator::validators::email;
///
/// let recipient = required([email()]);
/// assert!(recipient.is_required());
/// assert_eq!(recipient.validators().len(), 1);
/// ```
pub fn required<I>(validators: I) -> FieldDescriptor
where
    I: IntoIterator,
    I::Item: Into<Validator>,
{
    descriptor(true, validators)
}

/// Declares an optional field checked by `validators`, in order.
///
/// Mix validator types by converting each one:
///
/// ```
/// use badge_validator::model::optional;
/// use badge_validator::validators::{Validator, max_length, url};
///
/// let homepage = optional([Validator::from(url()), Validator::from(max_length(256))]);
/// assert!(!homepage.is_required());
/// assert_eq!(homepage.validators()[1].name(), "max_length");
/// ```
pub fn optional<I>(validators: I) -> FieldDescriptor
where
    I: IntoIterator,
    I::Item: Into<Validator>,
{
    descriptor(false, validators)
}
