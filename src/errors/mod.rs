//! Error types and diagnostic reporting.
//!
//! The lexer itself never fails. Malformed input still produces tokens, and
//! the problems found along the way are recorded as [`errors::Error`] values
//! carrying the source position they refer to. The same type is returned by
//! the driver when the source file cannot be read and by AST helpers that
//! expect a particular node kind.

pub mod errors;
