//! The Message record representing a single validated turn in a conversation.
//!
//! Messages are immutable after creation and carry all information needed
//! to reconstruct the conversation history.

use super::{ConversationId, MessageId, Role};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A validated message within a conversation.
///
/// Messages are the atomic unit of conversation history in Colloquy. They
/// are immutable after creation and are only ever constructed through paths
/// that enforce the message invariants.
///
/// # Invariants
///
/// - `id` and `conversation_id` are non-empty
/// - `content` is non-empty and not whitespace-only (enforced at construction)
/// - `created_at` is always populated
/// - Messages cannot be modified after creation
///
/// # Examples
///
/// ```
/// use colloquy::message::domain::{ConversationId, Message, Role};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let message = Message::new(
///     ConversationId::generate(),
///     Role::User,
///     "Hello!",
///     &clock,
/// ).expect("valid message");
///
/// assert_eq!(message.role(), Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// The conversation this message belongs to.
    conversation_id: ConversationId,

    /// The message text.
    content: String,

    /// The role of the message source.
    role: Role,

    /// When the message was created.
    created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a new message with a freshly minted identifier and the
    /// current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::EmptyContent`] if the content is empty
    /// or whitespace-only.
    pub fn new(
        conversation_id: ConversationId,
        role: Role,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, MessageBuilderError> {
        Self::builder(conversation_id, role)
            .with_content(content)
            .build(clock)
    }

    /// Creates a new message with a specified identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::EmptyContent`] if the content is empty
    /// or whitespace-only.
    pub fn new_with_id(
        id: MessageId,
        conversation_id: ConversationId,
        role: Role,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, MessageBuilderError> {
        Self::builder(conversation_id, role)
            .with_id(id)
            .with_content(content)
            .build(clock)
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the conversation identifier.
    #[must_use]
    pub const fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the message role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a builder for constructing messages with full control over
    /// identifier and timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use colloquy::message::domain::{ConversationId, Message, MessageId, Role};
    /// use mockable::DefaultClock;
    ///
    /// let clock = DefaultClock;
    /// let message = Message::builder(ConversationId::new("c-1"), Role::Assistant)
    ///     .with_id(MessageId::new("m-2"))
    ///     .with_content("Happy to help.")
    ///     .build(&clock)
    ///     .expect("valid message");
    /// ```
    #[must_use]
    pub fn builder(conversation_id: ConversationId, role: Role) -> MessageBuilder {
        MessageBuilder::new(conversation_id, role)
    }
}

/// Builder for constructing messages with full control over all fields.
#[derive(Debug)]
pub struct MessageBuilder {
    id: Option<MessageId>,
    conversation_id: ConversationId,
    role: Role,
    content: String,
    created_at: Option<DateTime<Utc>>,
}

impl MessageBuilder {
    /// Creates a new message builder.
    #[must_use]
    pub const fn new(conversation_id: ConversationId, role: Role) -> Self {
        Self {
            id: None,
            conversation_id,
            role,
            content: String::new(),
            created_at: None,
        }
    }

    /// Sets a specific message identifier.
    #[must_use]
    pub fn with_id(mut self, id: MessageId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the message content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets an explicit creation timestamp instead of reading the clock.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the message.
    ///
    /// An unset identifier is minted as a fresh random one; an unset
    /// timestamp is stamped from the injected clock.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBuilderError::EmptyContent`] if no content was set
    /// or the content is whitespace-only.
    pub fn build(self, clock: &impl Clock) -> Result<Message, MessageBuilderError> {
        if self.content.trim().is_empty() {
            return Err(MessageBuilderError::EmptyContent);
        }

        let id = self.id.unwrap_or_else(MessageId::generate);
        let created_at = self.created_at.unwrap_or_else(|| clock.utc());

        Ok(Message {
            id,
            conversation_id: self.conversation_id,
            content: self.content,
            role: self.role,
            created_at,
        })
    }
}

/// Errors that can occur when building a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageBuilderError {
    /// The message content is empty or whitespace-only.
    #[error("message content cannot be empty")]
    EmptyContent,
}
