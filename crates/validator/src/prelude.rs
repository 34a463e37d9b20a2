//! Prelude module for convenient imports.
//!
//! ```rust
//! use badge_validator::prelude::*;
//! use serde_json::json;
//!
//! let issuer = Model::builder("Issuer")
//!     .field("name", required([max_length(128)]))
//!     .field("contact", optional([email()]))
//!     .build();
//!
//! assert!(issuer.errors(&json!({"name": "Badge Academy"})).is_empty());
//! ```

pub use crate::foundation::{ErrorKind, Validate, ValidationError};

pub use crate::validators::{
    Email, IsoDate, MaxLength, Pattern, Url, Validator, email, iso_date, max_length, pattern, url,
};

pub use crate::model::{ErrorEntry, ErrorList, FieldDescriptor, Model, evaluate, optional, required};

pub use crate::models::{ASSERTION, BADGE, ISSUER, ModelKind};

pub use crate::report::{ValidationReport, validate};
