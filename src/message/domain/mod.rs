//! Domain types for the message subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are immutable after construction and serialisable via serde.

mod draft;
mod ids;
mod message;
mod role;

pub use draft::MessageDraft;
pub use ids::{ConversationId, MessageId};
pub use message::{Message, MessageBuilder, MessageBuilderError};
pub use role::{ParseRoleError, Role};
