//! Integration tests for the email and blank-field helpers and the
//! reservation checks built on them

use labkit::domain::{LabError, Reservation};
use labkit::validation::{
    is_blank, validate_email, validate_email_with, RejectionReason, ValidationPolicy, Validator,
};
use test_case::test_case;

#[test_case("mario.rossi@example.it")]
#[test_case("m_rossi+lab@mail.example.com")]
#[test_case("A%B-C@sub-domain.IT")]
fn test_email_accepted(text: &str) {
    assert!(validate_email(text).is_valid);
}

#[test_case(""; "empty")]
#[test_case("mario.rossi"; "no at sign")]
#[test_case("mario@localhost"; "no top level domain")]
#[test_case("mario@example.i"; "one letter tld")]
#[test_case("mario rossi@example.it"; "space")]
#[test_case("@example.it"; "empty local part")]
#[test_case("mario@example.it "; "trailing space")]
fn test_email_rejected(text: &str) {
    let outcome = validate_email(text);
    assert!(!outcome.is_valid);
    assert_eq!(outcome.reason, Some(RejectionReason::InvalidEmail));
    assert_eq!(outcome.error.as_deref(), Some("invalid email address"));
}

#[test]
fn test_email_terse_reason() {
    let outcome = validate_email_with("nope", false);
    assert_eq!(outcome.error.as_deref(), Some("invalid_email"));
}

#[test_case(None, true; "absent")]
#[test_case(Some(""), true; "empty")]
#[test_case(Some(" "), false; "space")]
#[test_case(Some("\t\n"), false; "other whitespace")]
#[test_case(Some("Mario"), false; "text")]
fn test_is_blank(text: Option<&str>, expected: bool) {
    assert_eq!(is_blank(text), expected);
}

fn reservation() -> Reservation {
    Reservation {
        first_name: "Mario".to_string(),
        last_name: "Rossi".to_string(),
        email: "mario.rossi@example.it".to_string(),
        fiscal_code: "rssmra85t10a562s".to_string(),
        health_card: "08038000120123456789".to_string(),
        ..Reservation::default()
    }
}

#[test]
fn test_reservation_normalized_on_success() {
    let validated = reservation()
        .into_validated(&Validator::default())
        .unwrap();
    assert_eq!(validated.fiscal_code, "RSSMRA85T10A562S");
}

#[test]
fn test_reservation_reports_every_field() {
    let reservation = Reservation {
        first_name: String::new(),
        email: "mario".to_string(),
        health_card: "80380001201234567890".to_string(),
        ..reservation()
    };

    let errors = reservation.validate(&Validator::default());
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["nome", "email", "ts"]);

    // Same card passes once the leading zero is not required
    let lenient = Validator::new(ValidationPolicy::default().with_leading_zero(false));
    let fields: Vec<&str> = reservation
        .validate(&lenient)
        .iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec!["nome", "email"]);
}

#[test]
fn test_reservation_summary_error() {
    let reservation = Reservation {
        fiscal_code: "short".to_string(),
        ..reservation()
    };

    match reservation.into_validated(&Validator::default()) {
        Err(LabError::Validation(summary)) => {
            assert_eq!(summary, "cf: wrong length: expected 16 characters, got 5");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
