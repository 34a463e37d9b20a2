//! String content validators
//!
//! Pattern-based checks. All of them fail with
//! [`ErrorKind::Regexp`](crate::foundation::ErrorKind::Regexp).

use std::sync::LazyLock;

use regex::Regex;

use crate::combinators::Or;
use crate::error::Error;
use crate::foundation::{Validate, ValidationError};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9][a-z0-9-]*[a-z0-9]$",
    )
    .expect("email pattern compiles")
});

static ABSOLUTE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url pattern compiles"));

static ROOT_RELATIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[^\s]+$").expect("path pattern compiles"));

// ============================================================================
// PATTERN VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string contains a match for a regular expression.
    ///
    /// Matching is unanchored: the pattern may occur anywhere in the input
    /// unless the pattern itself anchors with `^`/`$`.
    pub Pattern { regex: Regex } for str;
    rule(self, input) { self.regex.is_match(input) }
    error(self, input) { ValidationError::regexp(self.regex.as_str().to_owned()) }
    new(pattern: &str) -> Error {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }
    fn pattern(pattern: &str) -> Error;
}

impl Pattern {
    /// Wraps an already compiled regex.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates a permissive RFC 2822 style email address.
    ///
    /// Dot-separated local-part atoms, `@`, one or more dot-terminated DNS
    /// labels and a final label of at least two characters. Case-insensitive.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::regexp("email") }
    fn email();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates an absolute `http://` or `https://` URL without whitespace.
    pub AbsoluteUrl for str;
    rule(input) { ABSOLUTE_URL_REGEX.is_match(input) }
    error(input) { ValidationError::regexp("absolute http(s) url") }
    fn absolute_url();
}

crate::validator! {
    /// Validates a root-relative path: `/` followed by non-whitespace.
    pub RootRelativePath for str;
    rule(input) { ROOT_RELATIVE_REGEX.is_match(input) }
    error(input) { ValidationError::regexp("root-relative path") }
    fn root_relative_path();
}

/// Validates an absolute http(s) URL or a root-relative path.
///
/// The absolute form is tried first. When both forms fail, the
/// root-relative failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Url {
    inner: Or<AbsoluteUrl, RootRelativePath>,
}

impl Url {
    /// Creates a URL validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Or::new(absolute_url(), root_relative_path()),
        }
    }
}

impl Default for Url {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.inner.validate(input)
    }
}

/// Creates a URL validator.
#[must_use]
pub fn url() -> Url {
    Url::new()
}

// ============================================================================
// TESTS
// ============================================================================
