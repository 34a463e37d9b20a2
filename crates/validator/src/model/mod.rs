//! Models: named, ordered field tables and the evaluation procedure.
//!
//! A [`Model`] is data (a name and an insertion-ordered map of
//! [`FieldDescriptor`]s); [`evaluate`] walks it against a record. For every
//! declared field, in declaration order:
//!
//! 1. a required field with a falsy or absent value reports `missing` and
//!    its validators are skipped;
//! 2. an optional field absent from the record is skipped;
//! 3. otherwise every validator runs in order, and the *last* failure's kind
//!    is reported (earlier failures on the same field are overwritten).
//!
//! ```
//! use badge_validator::model::{Model, optional, required};
//! use badge_validator::validators::{email, url};
//! use serde_json::json;
//!
//! let contact = Model::builder("Contact")
//!     .field("email", required([email()]))
//!     .field("homepage", optional([url()]))
//!     .build();
//!
//! assert!(contact.errors(&json!({"email": "b@example.com"})).is_empty());
//!
//! let errors = contact.errors(&json!({"homepage": "not a url"}));
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].to_string(), "email: missing");
//! assert_eq!(errors[1].to_string(), "homepage: regexp");
//! ```

mod entry;
mod field;

pub use entry::{ErrorEntry, ErrorList};
pub use field::{FieldDescriptor, optional, required};

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{ErrorKind, Validate, is_truthy};

// ============================================================================
// MODEL
// ============================================================================

/// A named, fixed collection of field rules.
#[derive(Debug, Clone)]
pub struct Model {
    name: Cow<'static, str>,
    fields: IndexMap<String, FieldDescriptor>,
}

impl Model {
    /// Starts declaring a model.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// The model's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Looks up a declared field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the model declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields()
            .filter(|(_, field)| field.is_required())
            .map(|(name, _)| name)
    }

    /// Evaluates `record` against this model.
    ///
    /// See [`evaluate`].
    #[must_use]
    pub fn errors(&self, record: &Value) -> ErrorList {
        evaluate(self, record)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Declares a [`Model`] field by field.
#[derive(Debug)]
#[must_use = "builders do nothing until `build` is called"]
pub struct ModelBuilder {
    name: Cow<'static, str>,
    fields: IndexMap<String, FieldDescriptor>,
}

impl ModelBuilder {
    /// Declares a field.
    ///
    /// Redeclaring a name replaces its descriptor but keeps its original
    /// position.
    pub fn field(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.fields.insert(name.into(), descriptor);
        self
    }

    /// Finishes the declaration.
    pub fn build(self) -> Model {
        Model {
            name: self.name,
            fields: self.fields,
        }
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Checks `record` against every field `model` declares.
///
/// `record` is expected to be a JSON object; any other value is treated as
/// an empty record. Validator failures never escape: each failing field
/// contributes exactly one [`ErrorEntry`], in declaration order, and fields
/// that pass contribute nothing.
#[must_use]
pub fn evaluate(model: &Model, record: &Value) -> ErrorList {
    let values = record.as_object();
    let mut errors = ErrorList::new();

    for (name, field) in &model.fields {
        let value = values.and_then(|map| map.get(name));

        if field.is_required() && !value.is_some_and(is_truthy) {
            tracing::trace!(model = %model.name, field = %name, "required field missing");
            errors.push(ErrorEntry::missing(name.clone()));
            continue;
        }

        let Some(value) = value else {
            continue;
        };

        let mut pending: Option<ErrorKind> = None;
        for validator in field.validators() {
            if let Err(error) = validator.validate(value) {
                tracing::trace!(
                    model = %model.name,
                    field = %name,
                    validator = validator.name(),
                    %error,
                    "validator rejected field"
                );
                pending = Some(error.kind);
            }
        }

        if let Some(kind) = pending {
            errors.push(ErrorEntry::new(name.clone(), kind));
        }
    }

    tracing::debug!(
        model = %model.name,
        fields = model.fields.len(),
        errors = errors.len(),
        "evaluated record"
    );

    errors
}

// ============================================================================
// TESTS
// ============================================================================
