//! Colloquy: shared chat message data model and validation core.
//!
//! This crate provides the data model shared by a chat front-end and its
//! API layer: one [`message::domain::Message`] entity, a closed
//! [`message::domain::Role`] enumeration, a partial-record
//! [`message::domain::MessageDraft`] input shape, and the pure validation
//! contract over them.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for validation boundaries
//! - **Validation**: Predicate functions and the composite validator service
//!
//! Rendering, routing, persistence, and transport are deliberately out of
//! scope; collaborators construct drafts, ask this crate whether they are
//! valid, and promote them into normalized messages.
//!
//! # Example
//!
//! ```
//! use colloquy::message::domain::MessageDraft;
//! use colloquy::message::validation::rules::is_valid_message;
//!
//! let draft = MessageDraft::new()
//!     .with_id("m-1")
//!     .with_conversation_id("c-1")
//!     .with_content("Hello!")
//!     .with_role("user");
//!
//! assert!(is_valid_message(&draft));
//! ```

pub mod message;
