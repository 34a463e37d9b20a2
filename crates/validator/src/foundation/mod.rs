//! Core validation types and traits
//!
//! This module contains the building blocks every validator is made of:
//!
//! - **Traits**: [`Validate`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//! - **Coercions**: [`is_truthy`], [`stringify`] for untyped record values
//!
//! Validators are generic over their input type. String validators take
//! `str`; the field-level [`Validator`](crate::validators::Validator) enum
//! takes a raw `serde_json::Value` and converts it for the inner check.
//!
//! ```
//! use badge_validator::foundation::Validate;
//! use badge_validator::validators::MaxLength;
//!
//! let validator = MaxLength::new(5);
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("hello!").is_err());
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{ErrorKind, ValidationError};
pub use traits::Validate;
pub use validatable::{AsValidatable, is_truthy, stringify};
