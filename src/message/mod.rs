//! Canonical message format and validation for Colloquy.
//!
//! This module implements the shared message types and the validation and
//! normalization contract applied to candidate messages before they are
//! accepted into any conversation history.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::Role`], [`domain::MessageDraft`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::validator::MessageValidator`])
//! - **Validation**: Invariant enforcement at ingestion boundaries
//!
//! # Example
//!
//! ```
//! use colloquy::message::domain::MessageDraft;
//! use colloquy::message::ports::validator::MessageValidator;
//! use colloquy::message::validation::service::DefaultMessageValidator;
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let draft = MessageDraft::new()
//!     .with_id("m-1")
//!     .with_conversation_id("c-1")
//!     .with_content("Hello, Colloquy!")
//!     .with_role("user");
//!
//! let validator = DefaultMessageValidator::new();
//! validator.validate(&draft).expect("validation should pass");
//!
//! let message = validator.normalize(&draft, &clock).expect("valid draft");
//! assert_eq!(message.content(), "Hello, Colloquy!");
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;
