//! Built-in validators
//!
//! - **Length**: [`MaxLength`]
//! - **Content**: [`Pattern`], [`Email`], [`Url`] (built from [`AbsoluteUrl`]
//!   and [`RootRelativePath`])
//! - **Temporal**: [`IsoDate`]
//!
//! Each is a plain `str` validator. [`Validator`] wraps them for use on raw
//! record values inside a model.
//!
//! ```
//! use badge_validator::foundation::Validate;
//! use badge_validator::validators::{email, max_length, url};
//!
//! assert!(email().validate("b@example.com").is_ok());
//! assert!(url().validate("/relative/path").is_ok());
//! assert!(max_length(3).validate("four").is_err());
//! ```

pub mod content;
pub mod datetime;
pub mod length;
pub mod value;

pub use content::{
    AbsoluteUrl, Email, Pattern, RootRelativePath, Url, absolute_url, email, pattern,
    root_relative_path, url,
};
pub use datetime::{IsoDate, iso_date};
pub use length::{MaxLength, max_length};
pub use value::Validator;
