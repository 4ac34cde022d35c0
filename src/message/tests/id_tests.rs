//! Unit tests for identifier newtypes.

use crate::message::domain::{ConversationId, MessageId};

// ============================================================================
// Construction tests
// ============================================================================

#[test]
fn message_id_wraps_opaque_string() {
    let id = MessageId::new("m-42");
    assert_eq!(id.as_str(), "m-42");
    assert_eq!(id.into_inner(), "m-42");
}

#[test]
fn conversation_id_wraps_opaque_string() {
    let id = ConversationId::new("c-42");
    assert_eq!(id.as_str(), "c-42");
    assert_eq!(id.into_inner(), "c-42");
}

#[test]
fn generated_message_ids_are_non_empty_and_unique() {
    let first = MessageId::generate();
    let second = MessageId::generate();
    assert!(!first.as_str().is_empty());
    assert_ne!(first, second);
}

#[test]
fn generated_conversation_ids_are_non_empty_and_unique() {
    let first = ConversationId::generate();
    let second = ConversationId::generate();
    assert!(!first.as_str().is_empty());
    assert_ne!(first, second);
}

// ============================================================================
// Display and serde tests
// ============================================================================

#[test]
fn message_id_display_matches_inner_value() {
    let id = MessageId::new("m-1");
    assert_eq!(id.to_string(), "m-1");
}

#[test]
fn identifiers_serialize_transparently_as_strings() {
    let id = MessageId::new("m-1");
    let json = serde_json::to_string(&id).expect("id should serialize");
    assert_eq!(json, "\"m-1\"");

    let restored: MessageId = serde_json::from_str(&json).expect("id should deserialize");
    assert_eq!(restored, id);
}
