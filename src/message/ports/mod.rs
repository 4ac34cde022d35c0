//! Abstract trait interfaces for the message subsystem.

pub mod validator;
