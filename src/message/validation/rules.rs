//! Individual validation rules and the pure predicate surface.
//!
//! The predicates are total functions: for any input of the declared
//! parameter type they return a boolean, never an error. Absence and
//! malformed input are collapsed into the boolean result domain. The
//! `validate_*` functions apply the same checks but return typed errors for
//! callers that need to know which invariant failed.

use crate::message::{
    domain::{MessageDraft, Role},
    error::ValidationError,
    ports::validator::ValidationConfig,
};
use serde_json::Value;
use url::Url;

/// Returns `true` if the value is absent, empty, or whitespace-only.
///
/// Absence and whitespace-only are treated uniformly as "empty"; no input
/// is an error.
///
/// # Examples
///
/// ```
/// use colloquy::message::validation::rules::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some("  \t\n")));
/// assert!(!is_blank(Some("hello")));
/// ```
#[must_use]
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

/// Returns `true` only if every message invariant holds simultaneously.
///
/// A draft is valid when its `id` and `conversation_id` are present and
/// non-empty, its `content` is not blank, and its `role` is a member of the
/// closed [`Role`] enumeration. Validity is all-or-nothing: any missing or
/// empty required field, or any unrecognised role, yields `false`.
///
/// # Examples
///
/// ```
/// use colloquy::message::domain::MessageDraft;
/// use colloquy::message::validation::rules::is_valid_message;
///
/// let draft = MessageDraft::new()
///     .with_id("m-1")
///     .with_conversation_id("c-1")
///     .with_content("hi")
///     .with_role("user");
/// assert!(is_valid_message(&draft));
///
/// assert!(!is_valid_message(&MessageDraft::new()));
/// ```
#[must_use]
pub fn is_valid_message(draft: &MessageDraft) -> bool {
    has_identifier(draft.id.as_deref())
        && has_identifier(draft.conversation_id.as_deref())
        && !is_blank(draft.content.as_deref())
        && draft
            .role
            .as_deref()
            .is_some_and(|role| Role::try_from(role).is_ok())
}

/// Returns `true` only if the value is a finite number.
///
/// NaN and both infinities are rejected; negative zero and subnormal
/// values are finite and therefore valid.
#[must_use]
pub const fn is_finite_number(value: f64) -> bool {
    value.is_finite()
}

/// Returns `true` only for numeric JSON values with a finite `f64`
/// projection.
///
/// Strings, booleans, nulls, arrays, and objects yield `false` without
/// raising, including strings that merely look numeric.
///
/// # Examples
///
/// ```
/// use colloquy::message::validation::rules::is_numeric;
/// use serde_json::json;
///
/// assert!(is_numeric(&json!(42)));
/// assert!(!is_numeric(&json!("42")));
/// ```
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    value.as_f64().is_some_and(f64::is_finite)
}

/// Returns `true` if the string parses as an absolute URL under the WHATWG
/// URL standard.
///
/// Any scheme is accepted; relative references, strings without a scheme,
/// and the empty string are rejected. A parse failure becomes `false`,
/// never an error.
///
/// # Examples
///
/// ```
/// use colloquy::message::validation::rules::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(!is_valid_url("not a url"));
/// assert!(!is_valid_url(""));
/// ```
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Identifier presence: present and non-empty. Unlike content, identifiers
/// are opaque and are not trimmed before the emptiness check.
fn has_identifier(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

/// Validates that the draft carries a non-empty message identifier.
///
/// # Errors
///
/// Returns `ValidationError::MissingId` if the identifier is absent or empty.
pub fn validate_id(draft: &MessageDraft) -> Result<(), ValidationError> {
    if has_identifier(draft.id.as_deref()) {
        Ok(())
    } else {
        Err(ValidationError::MissingId)
    }
}

/// Validates that the draft carries a non-empty conversation identifier.
///
/// # Errors
///
/// Returns `ValidationError::MissingConversationId` if the identifier is
/// absent or empty.
pub fn validate_conversation_id(draft: &MessageDraft) -> Result<(), ValidationError> {
    if has_identifier(draft.conversation_id.as_deref()) {
        Ok(())
    } else {
        Err(ValidationError::MissingConversationId)
    }
}

/// Validates that the draft's role is present and a member of the closed
/// enumeration.
///
/// # Errors
///
/// Returns `ValidationError::MissingRole` if no role was supplied, or
/// `ValidationError::InvalidRole` if the role text is unrecognised.
pub fn validate_role(draft: &MessageDraft) -> Result<(), ValidationError> {
    let role = draft.role.as_deref().ok_or(ValidationError::MissingRole)?;
    Role::try_from(role)?;
    Ok(())
}

/// Validates the draft's content against the configured rules.
///
/// # Errors
///
/// Returns `ValidationError::EmptyContent` if the content is blank and the
/// configuration does not allow it, or `ValidationError::ContentTooLong` if
/// the content exceeds the configured character limit.
pub fn validate_content(
    draft: &MessageDraft,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if !config.allow_empty_content && is_blank(draft.content.as_deref()) {
        return Err(ValidationError::EmptyContent);
    }

    if let Some(content) = draft.content.as_deref() {
        let char_count = content.chars().count();
        if char_count > config.max_content_chars {
            return Err(ValidationError::ContentTooLong {
                actual_chars: char_count,
                limit_chars: config.max_content_chars,
            });
        }
    }

    Ok(())
}
