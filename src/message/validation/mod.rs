//! Message validation implementation.
//!
//! This module provides the validation contract in two registers: the pure
//! boolean predicates in [`rules`] used by callers that only need accept or
//! reject, and the composite [`service::DefaultMessageValidator`] for
//! callers that need typed diagnostics and draft normalization.

pub mod rules;
pub mod service;

pub use service::DefaultMessageValidator;
