//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source bytes
//! into a stream of tokens. It handles:
//!
//! - Keywords (`def`, `extern`) and identifiers, with maximal munch
//! - Numeric literals, with a `0.0` fallback and a diagnostic when parsing fails
//! - `#` line comments and whitespace
//! - Everything else as single-byte `Other` tokens

pub mod lexer;
pub mod tokens;
