//! Domain error types for message validation.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.
//!
//! The boolean predicate surface in [`validation::rules`](crate::message::validation::rules)
//! never produces these errors; they exist for callers that need to know
//! *which* invariant a draft violated rather than just that one did.

use super::domain::{MessageBuilderError, ParseRoleError};
use thiserror::Error;

/// Errors that can occur during message validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The message identifier is missing or empty.
    #[error("message ID is required")]
    MissingId,

    /// The conversation identifier is missing or empty.
    #[error("conversation ID is required")]
    MissingConversationId,

    /// The content is missing, empty, or whitespace-only.
    #[error("message content cannot be empty")]
    EmptyContent,

    /// No role was supplied.
    #[error("message role is required")]
    MissingRole,

    /// The role is not a member of the closed enumeration.
    #[error("invalid role '{0}' for this message")]
    InvalidRole(String),

    /// The content exceeds the configured length limit.
    #[error("content length {actual_chars} exceeds limit of {limit_chars} characters")]
    ContentTooLong {
        /// The actual content length in characters.
        actual_chars: usize,
        /// The maximum allowed length in characters.
        limit_chars: usize,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines multiple validation errors into a single error.
    ///
    /// If only one error is provided, returns it directly rather than wrapping.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this
    /// indicates a logic error in the caller. In release builds, returns an
    /// empty `Multiple` variant.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        match errors.len() {
            0 => {
                debug_assert!(false, "multiple() called with empty errors vector");
                Self::Multiple(errors)
            }
            1 => errors
                .into_iter()
                .next()
                .unwrap_or_else(|| Self::Multiple(Vec::new())),
            _ => Self::Multiple(errors),
        }
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ParseRoleError> for ValidationError {
    fn from(err: ParseRoleError) -> Self {
        Self::InvalidRole(err.value)
    }
}

impl From<MessageBuilderError> for ValidationError {
    fn from(err: MessageBuilderError) -> Self {
        match err {
            MessageBuilderError::EmptyContent => Self::EmptyContent,
        }
    }
}
