//! ISO 8601 date and date-time validator.
//!
//! Input must first match a strict layout (fixed-width ASCII digits, `T`
//! separator, no whitespace). Parsing is then delegated to `chrono`, which
//! rejects impossible calendar dates (day 40, month 22) rather than rolling
//! them over.

use std::sync::LazyLock;

use chrono::format::ParseErrorKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime, ParseError};
use regex::Regex;

use crate::foundation::{Validate, ValidationError};

/// Accepted layouts: fixed-width ASCII digits, uppercase `T`, no padding.
static ISO8601_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(?:T[0-9]{2}:[0-9]{2}(?::[0-9]{2}(?:\.[0-9]+)?(?:Z|[+-][0-9]{2}:[0-9]{2})?)?)?$",
    )
    .expect("iso 8601 shape pattern compiles")
});

/// Local date-time layouts tried after RFC 3339, most specific first.
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// ISODATE VALIDATOR
// ============================================================================

/// Validates ISO 8601 date and date-time strings.
///
/// Supports:
/// - `YYYY-MM-DD`
/// - `YYYY-MM-DDTHH:MM`
/// - `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds
/// - `YYYY-MM-DDTHH:MM:SS` followed by `Z` or `+HH:MM` / `-HH:MM`
///
/// Fields are fixed width and the separator is an uppercase `T`.
///
/// # Examples
///
/// ```
/// use badge_validator::validators::IsoDate;
/// use badge_validator::foundation::Validate;
///
/// let v = IsoDate::new();
/// assert!(v.validate("2010-09-10").is_ok());
/// assert!(v.validate("2010-09-10T21:00:00").is_ok());
/// assert!(v.validate("2010-09-10T21:00:00Z").is_ok());
/// assert!(v.validate("2010-09-40").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDate;

impl IsoDate {
    /// Creates a new `IsoDate` validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Creates an ISO 8601 date validator.
#[must_use]
pub const fn iso_date() -> IsoDate {
    IsoDate
}

/// Parses shape-checked `input` with every supported layout, returning the
/// most relevant error when none match.
fn parse_iso8601(input: &str) -> Result<(), ParseError> {
    if !input.contains('T') {
        return NaiveDate::parse_from_str(input, DATE_FORMAT).map(drop);
    }

    let mut last = match DateTime::parse_from_rfc3339(input) {
        Ok(_) => return Ok(()),
        Err(e) => e,
    };

    for format in NAIVE_DATE_TIME_FORMATS {
        match NaiveDateTime::parse_from_str(input, format) {
            Ok(_) => return Ok(()),
            Err(e) => last = e,
        }
    }

    Err(last)
}

fn describe(error: ParseError) -> &'static str {
    match error.kind() {
        ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => "not a calendar date",
        ParseErrorKind::TooShort => "input is truncated",
        ParseErrorKind::TooLong => "unexpected trailing input",
        _ => "unrecognized layout",
    }
}

impl Validate for IsoDate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::iso_date("empty input"));
        }

        if !ISO8601_SHAPE.is_match(input) {
            return Err(ValidationError::iso_date("unrecognized layout")
                .with_param("input", input.to_owned()));
        }

        parse_iso8601(input).map_err(|e| {
            ValidationError::iso_date(describe(e)).with_param("input", input.to_owned())
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
