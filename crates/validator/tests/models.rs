//! End-to-end checks of the declared models.

use badge_validator::foundation::ErrorKind;
use badge_validator::model::{ErrorEntry, Model, required};
use badge_validator::models::{ASSERTION, BADGE, ISSUER, ModelKind};
use badge_validator::validators::{Validator, email, iso_date, max_length, url};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn kinds(errors: &[ErrorEntry]) -> Vec<(String, ErrorKind)> {
    errors
        .iter()
        .map(|e| (e.field().to_owned(), e.kind()))
        .collect()
}

// ============================================================================
// EMPTY RECORDS
// ============================================================================

#[rstest]
#[case(ModelKind::Assertion)]
#[case(ModelKind::Badge)]
#[case(ModelKind::Issuer)]
fn empty_record_reports_each_required_field_missing(#[case] kind: ModelKind) {
    init_tracing();
    let model = kind.model();
    let errors = model.errors(&json!({}));

    let expected: Vec<ErrorEntry> = model.required_fields().map(ErrorEntry::missing).collect();
    assert_eq!(errors, expected);
    assert!(errors.iter().all(|e| e.kind() == ErrorKind::Missing));
}

#[test]
fn empty_badge_has_five_errors() {
    let errors = BADGE.errors(&json!({}));
    assert_eq!(errors.len(), 5);
    assert_eq!(
        errors.iter().map(ErrorEntry::field).collect::<Vec<_>>(),
        ["version", "name", "description", "image", "criteria"]
    );
}

// ============================================================================
// ASSERTION
// ============================================================================

#[test]
fn assertion_with_only_recipient_is_valid() {
    init_tracing();
    assert!(ASSERTION.errors(&json!({"recipient": "b@example.com"})).is_empty());
}

#[test]
fn full_valid_assertion() {
    let record = json!({
        "recipient": "first.last@domain.local.com",
        "evidence": "/evidence/42",
        "expires": "2030-01-01",
        "issued_at": "2010-09-10T21:00:00",
    });
    assert!(ASSERTION.errors(&record).is_empty());
}

#[test]
fn invalid_assertion_fields_reported_in_declaration_order() {
    let record = json!({
        "issued_at": "2010-22-10",
        "expires": "2010-09-40",
        "evidence": "ftp://example.com/path",
        "recipient": "no-at-at-alll",
    });
    assert_eq!(
        kinds(&ASSERTION.errors(&record)),
        vec![
            ("recipient".to_owned(), ErrorKind::Regexp),
            ("evidence".to_owned(), ErrorKind::Regexp),
            ("expires".to_owned(), ErrorKind::IsoDate),
            ("issued_at".to_owned(), ErrorKind::IsoDate),
        ]
    );
}

#[rstest]
#[case(json!(""))]
#[case(json!(0))]
#[case(json!(false))]
#[case(json!(null))]
fn falsy_recipient_is_missing(#[case] recipient: Value) {
    let errors = ASSERTION.errors(&json!({ "recipient": recipient }));
    assert_eq!(errors, vec![ErrorEntry::missing("recipient")]);
}

#[rstest]
#[case(" 2030-01-01")]
#[case("2030-1-1")]
#[case("2030- 01- 01")]
#[case("2030-01-01T 09:00:00")]
fn loosely_formatted_dates_are_rejected(#[case] expires: &str) {
    let errors = ASSERTION.errors(&json!({"recipient": "b@e.com", "expires": expires}));
    assert_eq!(errors, vec![ErrorEntry::new("expires", ErrorKind::IsoDate)]);
}

#[test]
fn empty_optional_evidence_still_runs_validators() {
    let errors = ASSERTION.errors(&json!({"recipient": "b@e.com", "evidence": ""}));
    assert_eq!(errors, vec![ErrorEntry::new("evidence", ErrorKind::Regexp)]);
}

// ============================================================================
// BADGE
// ============================================================================

#[test]
fn badge_version_keeps_literal_d_segment() {
    let base = json!({
        "name": "Reader",
        "description": "Read a book",
        "image": "https://example.com/badge.png",
        "criteria": "/criteria",
    });

    let with_version = |version: &str| {
        let mut record = base.clone();
        record["version"] = json!(version);
        BADGE.errors(&record)
    };

    assert!(with_version("v1.0.d").is_empty());
    assert!(with_version("0.5.ddd").is_empty());
    assert_eq!(
        with_version("1.0.0"),
        vec![ErrorEntry::new("version", ErrorKind::Regexp)]
    );
}

#[test]
fn badge_text_fields_are_bounded() {
    let record = json!({
        "version": "1.0.d",
        "name": "n".repeat(128),
        "description": "d".repeat(129),
        "image": "/image.png",
        "criteria": "http://example.com/criteria",
    });
    assert_eq!(
        BADGE.errors(&record),
        vec![ErrorEntry::new("description", ErrorKind::Length)]
    );
}

// ============================================================================
// ISSUER
// ============================================================================

#[test]
fn issuer_optional_fields_are_checked_when_present() {
    let record = json!({
        "name": "Badge Academy",
        "org": "o".repeat(200),
        "contact": "b@ex",
        "url": "example.com",
    });
    assert_eq!(
        kinds(&ISSUER.errors(&record)),
        vec![
            ("org".to_owned(), ErrorKind::Length),
            ("contact".to_owned(), ErrorKind::Regexp),
            ("url".to_owned(), ErrorKind::Regexp),
        ]
    );
}

#[test]
fn issuer_name_must_be_a_string() {
    let errors = ISSUER.errors(&json!({"name": 42}));
    assert_eq!(errors, vec![ErrorEntry::new("name", ErrorKind::TypeMismatch)]);
}

// ============================================================================
// CUSTOM MODELS
// ============================================================================

#[test]
fn second_failure_overwrites_first() {
    let model = Model::builder("Quirk")
        .field(
            "value",
            required([Validator::from(iso_date()), Validator::from(email())]),
        )
        .build();

    let errors = model.errors(&json!({"value": "neither"}));
    assert_eq!(errors, vec![ErrorEntry::new("value", ErrorKind::Regexp)]);
}

#[test]
fn independent_max_length_validators() {
    let model = Model::builder("Bounds")
        .field("one", required([max_length(1)]))
        .field("two", required([max_length(2)]))
        .build();

    assert!(model.errors(&json!({"one": "a", "two": "ab"})).is_empty());
    assert_eq!(
        model.errors(&json!({"one": "ab", "two": "ab"})),
        vec![ErrorEntry::new("one", ErrorKind::Length)]
    );
    assert_eq!(
        model.errors(&json!({"one": "a", "two": "abc"})),
        vec![ErrorEntry::new("two", ErrorKind::Length)]
    );
}

#[test]
fn models_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let record = json!({"recipient": format!("user{i}@example.com"), "evidence": url_for(i)});
                ASSERTION.errors(&record)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_empty());
    }
}

fn url_for(i: usize) -> String {
    format!("https://example.com/evidence/{i}")
}

#[test]
fn url_constructor_is_reusable() {
    let validator = Validator::from(url());
    let model = Model::builder("Links")
        .field("a", required([validator.clone()]))
        .field("b", required([validator]))
        .build();
    assert!(model.errors(&json!({"a": "/a", "b": "http://b.example/"})).is_empty());
}
