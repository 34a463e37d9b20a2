//! Validator combinators.
//!
//! Only the fallback combinator is needed by the built-in validators: the URL
//! check is an absolute-URL pattern with a root-relative-path fallback.

pub mod or;

pub use or::{Or, or};
