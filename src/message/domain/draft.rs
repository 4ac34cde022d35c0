//! Partial message records received from untrusted boundaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate message in which every field is individually optional.
///
/// Drafts arrive from external callers (a chat UI, an API layer) before any
/// invariant has been checked: any subset of the fields may be present, and
/// the role is carried as raw text that has not yet been matched against
/// the closed [`Role`](super::Role) enumeration. Validation only inspects a
/// draft; it never mutates or takes ownership of one.
///
/// The serialised form uses the front-end's camelCase field names, and
/// missing fields deserialise as `None` rather than failing.
///
/// # Examples
///
/// ```
/// use colloquy::message::domain::MessageDraft;
///
/// let draft: MessageDraft =
///     serde_json::from_str(r#"{"id": "m-1", "role": "user"}"#).expect("valid JSON");
/// assert_eq!(draft.id.as_deref(), Some("m-1"));
/// assert!(draft.content.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageDraft {
    /// Opaque message identifier, if supplied.
    pub id: Option<String>,

    /// Identifier of the owning conversation, if supplied.
    pub conversation_id: Option<String>,

    /// The message text, if supplied.
    pub content: Option<String>,

    /// Raw role text, not yet checked against the closed enumeration.
    pub role: Option<String>,

    /// Creation timestamp, if supplied.
    pub created_at: Option<DateTime<Utc>>,
}

impl MessageDraft {
    /// Creates an empty draft with no fields populated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the conversation identifier.
    #[must_use]
    pub fn with_conversation_id(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }

    /// Sets the message content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the raw role text.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
