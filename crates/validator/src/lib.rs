//! # badge-validator
//!
//! Declarative field validation for Open Badges records.
//!
//! A [`Model`](model::Model) is a named, ordered table of fields; each field
//! is [`required`](model::required) or [`optional`](model::optional) and
//! carries an ordered list of validators. Evaluating a record (a
//! `serde_json` object) yields one [`ErrorEntry`](model::ErrorEntry) per
//! failing field.
//!
//! ## Quick Start
//!
//! ```rust
//! use badge_validator::models::BADGE;
//! use serde_json::json;
//!
//! let errors = BADGE.errors(&json!({}));
//! assert_eq!(errors.len(), 5); // every required field is missing
//! ```
//!
//! ## Built-in Validators
//!
//! - **Content**: [`Pattern`](validators::Pattern), [`Email`](validators::Email),
//!   [`Url`](validators::Url)
//! - **Length**: [`MaxLength`](validators::MaxLength)
//! - **Temporal**: [`IsoDate`](validators::IsoDate)
//!
//! ## Features
//!
//! - `serde` (default): `Serialize` for reports, entries and kinds.
//! - `evaluate-assertion`: [`validate`] checks the record against the
//!   Assertion model instead of always reporting `okay`.

// ValidationError is the error type of every validator; boxing it would add
// indirection to every check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod error;
pub mod foundation;
mod macros;
pub mod model;
pub mod models;
pub mod prelude;
pub mod report;
pub mod validators;

pub use error::{Error, Result};
pub use report::{ValidationReport, validate};
