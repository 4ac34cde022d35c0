//! Unit tests for the validation service and normalization path.

use crate::message::{
    domain::{MessageDraft, Role},
    error::ValidationError,
    ports::validator::{MessageValidator, ValidationConfig},
    validation::rules::is_valid_message,
    validation::service::DefaultMessageValidator,
};
use chrono::{TimeZone, Utc};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn default_validator() -> DefaultMessageValidator {
    DefaultMessageValidator::new()
}

#[fixture]
fn lenient_validator() -> DefaultMessageValidator {
    DefaultMessageValidator::with_config(ValidationConfig::lenient())
}

#[fixture]
fn strict_validator() -> DefaultMessageValidator {
    DefaultMessageValidator::with_config(ValidationConfig::strict())
}

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn valid_draft() -> MessageDraft {
    MessageDraft::new()
        .with_id("m-1")
        .with_conversation_id("c-1")
        .with_content("hi")
        .with_role("user")
}

// ============================================================================
// Structure validation tests
// ============================================================================

#[rstest]
fn valid_draft_passes_all_validation(default_validator: DefaultMessageValidator) {
    assert!(default_validator.validate(&valid_draft()).is_ok());
}

#[rstest]
fn missing_id_fails_structure_validation(default_validator: DefaultMessageValidator) {
    let mut draft = valid_draft();
    draft.id = None;
    assert!(matches!(
        default_validator.validate_structure(&draft),
        Err(ValidationError::MissingId)
    ));
}

#[rstest]
fn empty_conversation_id_fails_structure_validation(default_validator: DefaultMessageValidator) {
    let draft = valid_draft().with_conversation_id("");
    assert!(matches!(
        default_validator.validate_structure(&draft),
        Err(ValidationError::MissingConversationId)
    ));
}

#[rstest]
fn unknown_role_fails_structure_validation(default_validator: DefaultMessageValidator) {
    let draft = valid_draft().with_role("moderator");
    let err = default_validator
        .validate_structure(&draft)
        .expect_err("unknown role should fail");
    assert_eq!(err, ValidationError::InvalidRole("moderator".to_owned()));
}

#[rstest]
fn empty_draft_collects_every_failure(default_validator: DefaultMessageValidator) {
    let err = default_validator
        .validate(&MessageDraft::new())
        .expect_err("empty draft should fail");

    assert!(err.is_multiple());
    let errors = err.errors().expect("multiple errors");
    assert_eq!(errors.len(), 4);
    assert!(errors.contains(&ValidationError::MissingId));
    assert!(errors.contains(&ValidationError::MissingConversationId));
    assert!(errors.contains(&ValidationError::MissingRole));
    assert!(errors.contains(&ValidationError::EmptyContent));
}

// ============================================================================
// Content validation tests
// ============================================================================

#[rstest]
fn whitespace_content_fails_content_validation(default_validator: DefaultMessageValidator) {
    let draft = valid_draft().with_content("  \t\n");
    assert!(matches!(
        default_validator.validate_content(&draft),
        Err(ValidationError::EmptyContent)
    ));
}

#[rstest]
fn lenient_config_allows_empty_content(lenient_validator: DefaultMessageValidator) {
    let draft = valid_draft().with_content("");
    assert!(lenient_validator.validate(&draft).is_ok());
}

#[rstest]
fn strict_config_rejects_oversized_content(strict_validator: DefaultMessageValidator) {
    let draft = valid_draft().with_content("x".repeat(10_001));
    let err = strict_validator
        .validate_content(&draft)
        .expect_err("oversized content should fail");
    assert_eq!(
        err,
        ValidationError::ContentTooLong {
            actual_chars: 10_001,
            limit_chars: 10_000,
        }
    );
}

#[rstest]
fn content_at_limit_passes(strict_validator: DefaultMessageValidator) {
    let draft = valid_draft().with_content("x".repeat(10_000));
    assert!(strict_validator.validate_content(&draft).is_ok());
}

// ============================================================================
// Predicate agreement tests
// ============================================================================

#[rstest]
#[case::valid(valid_draft())]
#[case::empty(MessageDraft::new())]
#[case::empty_content(valid_draft().with_content(""))]
#[case::whitespace_content(valid_draft().with_content(" \t"))]
#[case::unknown_role(valid_draft().with_role("moderator"))]
#[case::empty_id(valid_draft().with_id(""))]
fn boolean_predicate_agrees_with_default_validator(
    default_validator: DefaultMessageValidator,
    #[case] draft: MessageDraft,
) {
    assert_eq!(
        is_valid_message(&draft),
        default_validator.validate(&draft).is_ok()
    );
}

// ============================================================================
// Normalization tests
// ============================================================================

#[rstest]
fn normalize_promotes_valid_draft(
    default_validator: DefaultMessageValidator,
    clock: DefaultClock,
) {
    let message = default_validator
        .normalize(&valid_draft(), &clock)
        .expect("valid draft should normalize");

    assert_eq!(message.id().as_str(), "m-1");
    assert_eq!(message.conversation_id().as_str(), "c-1");
    assert_eq!(message.content(), "hi");
    assert_eq!(message.role(), Role::User);
}

#[rstest]
fn normalize_preserves_supplied_timestamp(
    default_validator: DefaultMessageValidator,
    clock: DefaultClock,
) {
    let created_at = Utc
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .single()
        .expect("valid timestamp");
    let draft = valid_draft().with_created_at(created_at);

    let message = default_validator
        .normalize(&draft, &clock)
        .expect("valid draft should normalize");
    assert_eq!(message.created_at(), created_at);
}

#[rstest]
fn normalize_stamps_missing_timestamp_from_clock(
    default_validator: DefaultMessageValidator,
    clock: DefaultClock,
) {
    let before = clock.utc();
    let message = default_validator
        .normalize(&valid_draft(), &clock)
        .expect("valid draft should normalize");
    let after = clock.utc();

    assert!(message.created_at() >= before);
    assert!(message.created_at() <= after);
}

#[rstest]
fn normalize_rejects_invalid_draft(
    default_validator: DefaultMessageValidator,
    clock: DefaultClock,
) {
    let draft = valid_draft().with_role("moderator");
    let err = default_validator
        .normalize(&draft, &clock)
        .expect_err("unknown role should fail");
    assert_eq!(err, ValidationError::InvalidRole("moderator".to_owned()));
}

#[rstest]
fn normalize_rejects_blank_content_even_when_lenient(
    lenient_validator: DefaultMessageValidator,
    clock: DefaultClock,
) {
    let draft = valid_draft().with_content("   ");
    assert!(matches!(
        lenient_validator.normalize(&draft, &clock),
        Err(ValidationError::EmptyContent)
    ));
}

// ============================================================================
// Error combination tests
// ============================================================================

#[test]
fn multiple_flattens_singleton_vectors() {
    let err = ValidationError::multiple(vec![ValidationError::MissingId]);
    assert_eq!(err, ValidationError::MissingId);
    assert!(!err.is_multiple());
}

#[test]
fn multiple_preserves_several_errors() {
    let err = ValidationError::multiple(vec![
        ValidationError::MissingId,
        ValidationError::EmptyContent,
    ]);
    assert!(err.is_multiple());
    assert_eq!(err.errors().map(<[ValidationError]>::len), Some(2));
}

#[test]
fn multiple_error_display_joins_individual_messages() {
    let err = ValidationError::multiple(vec![
        ValidationError::MissingId,
        ValidationError::EmptyContent,
    ]);
    let display = err.to_string();
    assert!(display.contains("message ID is required"));
    assert!(display.contains("message content cannot be empty"));
}
