//! Integration tests for health insurance card validation

use labkit::validation::{
    validate_health_card_code, EntityKind, HealthCardCode, HealthCardValidator, RejectionKind,
    RejectionReason, ValidationPolicy, ENTITY_CODES,
};
use test_case::test_case;

const WITH_ZERO: &str = "08038000120123456789";
const WITHOUT_ZERO: &str = "80380001201234567890";

fn without_zero_validator() -> HealthCardValidator {
    HealthCardValidator::new(ValidationPolicy::default().with_leading_zero(false))
}

#[test]
fn test_accepts_leading_zero_by_default() {
    let outcome = validate_health_card_code(WITH_ZERO);
    assert!(outcome.is_valid, "{:?}", outcome.error);
}

#[test]
fn test_accepts_without_leading_zero_when_configured() {
    assert!(without_zero_validator().validate(WITHOUT_ZERO).is_valid);
}

#[test]
fn test_policies_do_not_cross() {
    assert_eq!(
        validate_health_card_code(WITHOUT_ZERO).reason,
        Some(RejectionReason::LeadingZero)
    );
    assert_eq!(
        without_zero_validator().validate(WITH_ZERO).reason,
        Some(RejectionReason::CardType)
    );
}

#[test_case("18038000120123456789", RejectionReason::LeadingZero; "leading zero")]
#[test_case("07038000120123456789", RejectionReason::CardType; "card type")]
#[test_case("08039000120123456789", RejectionReason::CountryCode; "country code")]
#[test_case("08038010120123456789", RejectionReason::EntityPrefix; "entity prefix")]
#[test_case("08038000999123456789", RejectionReason::EntityNotRecognized; "unknown entity")]
#[test_case("0803800012012345678X", RejectionReason::TrailingSegmentNotNumeric; "trailing letter")]
#[test_case("08038000120 23456789", RejectionReason::TrailingSegmentNotNumeric; "trailing space")]
fn test_rejects_with_leading_zero(code: &str, expected: RejectionReason) {
    let outcome = validate_health_card_code(code);
    assert!(!outcome.is_valid);
    assert_eq!(outcome.reason, Some(expected));
}

#[test_case("70380001201234567890", RejectionReason::CardType; "card type")]
#[test_case("80390001201234567890", RejectionReason::CountryCode; "country code")]
#[test_case("80380101201234567890", RejectionReason::EntityPrefix; "entity prefix")]
#[test_case("80380009991234567890", RejectionReason::EntityNotRecognized; "unknown entity")]
#[test_case("8038000120123456789X", RejectionReason::TrailingSegmentNotNumeric; "check digit")]
fn test_rejects_without_leading_zero(code: &str, expected: RejectionReason) {
    assert_eq!(without_zero_validator().validate(code).reason, Some(expected));
}

#[test]
fn test_unknown_entity_is_a_lookup_rejection() {
    let outcome = validate_health_card_code("08038000999123456789");
    assert_eq!(outcome.error.as_deref(), Some("entity code not recognized"));
    assert_eq!(outcome.reason.unwrap().kind(), RejectionKind::Lookup);
}

#[test_case(""; "empty")]
#[test_case("0803800012012345678"; "nineteen")]
#[test_case("080380001201234567890"; "twenty one")]
fn test_wrong_length(code: &str) {
    let reason = validate_health_card_code(code).reason.unwrap();
    assert_eq!(
        reason,
        RejectionReason::WrongLength {
            expected: 20,
            actual: code.chars().count()
        }
    );
}

#[test]
fn test_every_registered_entity_accepted_in_both_layouts() {
    let lenient = without_zero_validator();
    for entity in ENTITY_CODES.iter() {
        let with_zero = format!("0803800{}123456789", entity.code);
        let without_zero = format!("803800{}1234567890", entity.code);

        assert!(validate_health_card_code(&with_zero).is_valid, "{}", entity.code);
        assert!(lenient.validate(&without_zero).is_valid, "{}", entity.code);
    }
}

#[test]
fn test_registry_shape() {
    assert_eq!(ENTITY_CODES.len(), 24);
    let specials: Vec<&str> = ENTITY_CODES
        .iter()
        .filter(|e| e.kind == EntityKind::Special)
        .map(|e| e.code)
        .collect();
    assert_eq!(specials, vec!["001", "002", "003"]);
}

#[test]
fn test_parsed_segments_agree_across_layouts() {
    let with_zero: HealthCardCode = WITH_ZERO.parse().unwrap();
    let without_zero = without_zero_validator().parse(WITHOUT_ZERO).unwrap();

    assert!(with_zero.has_leading_zero());
    assert!(!without_zero.has_leading_zero());
    assert_eq!(with_zero.entity_code(), "120");
    assert_eq!(without_zero.entity_code(), "120");
    assert_eq!(
        with_zero.entity().map(|e| e.name),
        without_zero.entity().map(|e| e.name)
    );
    assert_eq!(without_zero.check_digit(), '0');
}

#[test]
fn test_validation_is_idempotent() {
    for code in [WITH_ZERO, WITHOUT_ZERO, "08038000999123456789", ""] {
        assert_eq!(
            validate_health_card_code(code),
            validate_health_card_code(code)
        );
    }
}
