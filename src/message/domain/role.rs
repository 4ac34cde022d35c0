//! Message authorship roles.
//!
//! The role enumeration is closed: a message is authored by the user, the
//! system, or the assistant, and nothing else. The wire representation is
//! the lowercase variant name, matched exactly (no trimming, no case
//! folding), so the mapping between variants and strings is total in both
//! directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The source of a message within a conversation.
///
/// # Examples
///
/// ```
/// use colloquy::message::domain::Role;
///
/// let role = Role::try_from("assistant").expect("known role");
/// assert_eq!(role, Role::Assistant);
/// assert_eq!(role.as_str(), "assistant");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A human participant.
    User,
    /// Instructions or context injected by the application.
    System,
    /// The model's reply.
    Assistant,
}

impl Role {
    /// Returns the canonical wire representation of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::System => "system",
            Self::Assistant => "assistant",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Self::User),
            "system" => Ok(Self::System),
            "assistant" => Ok(Self::Assistant),
            other => Err(ParseRoleError {
                value: other.to_owned(),
            }),
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string outside the closed role set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: '{value}'")]
pub struct ParseRoleError {
    /// The rejected input string.
    pub value: String,
}
