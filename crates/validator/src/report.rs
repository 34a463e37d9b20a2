//! The public validation entry point.
//!
//! [`validate`] takes an assertion-shaped record and returns a
//! [`ValidationReport`]. By default the report is always `okay` with an
//! empty error list and the Assertion model is not consulted. Enabling the
//! `evaluate-assertion` feature runs the record through
//! [`ASSERTION`](crate::models::ASSERTION) instead.

use serde_json::Value;

use crate::model::ErrorList;

/// Report status for a record with no errors.
pub const STATUS_OKAY: &str = "okay";

/// Report status for a record with at least one error.
pub const STATUS_INVALID: &str = "invalid";

/// Outcome of [`validate`].
///
/// Serializes as `{"status": "...", "error": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    /// `"okay"` or `"invalid"`.
    pub status: &'static str,
    /// Per-field errors, empty when the record is accepted.
    pub error: ErrorList,
}

impl ValidationReport {
    /// A report with no errors.
    #[must_use]
    pub fn okay() -> Self {
        Self {
            status: STATUS_OKAY,
            error: ErrorList::new(),
        }
    }

    /// Builds a report from an error list.
    #[must_use]
    pub fn from_errors(error: ErrorList) -> Self {
        let status = if error.is_empty() {
            STATUS_OKAY
        } else {
            STATUS_INVALID
        };
        Self { status, error }
    }

    /// Returns true if no errors were reported.
    #[must_use]
    pub fn is_okay(&self) -> bool {
        self.error.is_empty()
    }
}

/// Validates an assertion-shaped record.
///
/// ```
/// use badge_validator::validate;
/// use serde_json::json;
///
/// let report = validate(&json!({"recipient": "b@example.com"}));
/// assert_eq!(report.status, "okay");
/// assert!(report.error.is_empty());
/// ```
#[must_use]
pub fn validate(record: &Value) -> ValidationReport {
    #[cfg(feature = "evaluate-assertion")]
    let report = ValidationReport::from_errors(crate::models::ASSERTION.errors(record));

    #[cfg(not(feature = "evaluate-assertion"))]
    let report = {
        let _ = record;
        ValidationReport::okay()
    };

    tracing::debug!(
        status = report.status,
        errors = report.error.len(),
        "validated assertion"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use crate::model::ErrorEntry;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn accepted_record_is_okay() {
        let report = validate(&json!({"recipient": "b@example.com"}));
        assert_eq!(report, ValidationReport::okay());
        assert!(report.is_okay());
    }

    #[cfg(not(feature = "evaluate-assertion"))]
    #[test]
    fn stub_ignores_record_contents() {
        for record in [json!({}), json!({"recipient": "nope"}), json!(null)] {
            assert_eq!(validate(&record), ValidationReport::okay());
        }
    }

    #[cfg(feature = "evaluate-assertion")]
    #[test]
    fn wired_entry_point_reports_assertion_errors() {
        let report = validate(&json!({"recipient": "nope", "expires": "2010-09-40"}));
        assert_eq!(report.status, STATUS_INVALID);
        assert_eq!(
            report.error,
            vec![
                ErrorEntry::new("recipient", ErrorKind::Regexp),
                ErrorEntry::new("expires", ErrorKind::IsoDate),
            ]
        );
    }

    #[test]
    fn from_errors_sets_status() {
        assert_eq!(ValidationReport::from_errors(vec![]).status, STATUS_OKAY);
        let report = ValidationReport::from_errors(vec![ErrorEntry::new("x", ErrorKind::Length)]);
        assert_eq!(report.status, STATUS_INVALID);
        assert!(!report.is_okay());
    }
}
