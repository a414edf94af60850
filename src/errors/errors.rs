use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingArgument { .. } => "MissingArgument",
            ErrorImpl::FileReadError { .. } => "FileReadError",
            ErrorImpl::UnexpectedNode { .. } => "UnexpectedNode",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, expected a finite decimal with at most one `.`",
                token
            )),
            ErrorImpl::MissingArgument { name } => {
                ErrorTip::Suggestion(format!("Usage: kaleidoscope <{}>", name))
            }
            ErrorImpl::FileReadError { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedNode { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}` node, received `{}`",
                expected, received
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("missing argument: {name}")]
    MissingArgument { name: String },
    #[error("{path}: {message}")]
    FileReadError { path: String, message: String },
    #[error("unexpected node: expected {expected}, received {received}")]
    UnexpectedNode { expected: String, received: String },
}
