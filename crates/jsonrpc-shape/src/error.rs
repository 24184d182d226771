//! Reasons a message is rejected, and their JSON-RPC error codes.

use crate::types::{ErrorCode, ErrorObject, MessageKind, ParseResult};

/// Every way a message can fail classification.
///
/// `Display` is the exact diagnostic carried in the rejected [`ParseResult`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Parse error: {0}")]
    Syntax(String),

    #[error("Invalid Request: message must be a JSON object")]
    NotAnObject,

    #[error("Invalid Request: jsonrpc field must be '2.0'")]
    VersionMismatch,

    #[error("Invalid Request: message structure doesn't match any valid JSON-RPC 2.0 type")]
    UnknownShape,

    #[error("Invalid Request: method must be a string")]
    MethodNotString,

    #[error("Invalid Request: id must be a string, number, or null")]
    InvalidId,

    #[error("Invalid Request: error must be an object")]
    ErrorNotObject,
}

impl ShapeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ShapeError::Syntax(_) => ErrorCode::ParseError,
            _ => ErrorCode::InvalidRequest,
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self.code() {
            ErrorCode::ParseError => MessageKind::ParseError,
            _ => MessageKind::InvalidRequest,
        }
    }

    pub fn to_error_object(&self) -> ErrorObject {
        ErrorObject {
            code: self.code().code(),
            message: self.to_string(),
        }
    }
}

impl From<serde_json::Error> for ShapeError {
    fn from(e: serde_json::Error) -> Self {
        ShapeError::Syntax(e.to_string())
    }
}

impl From<ShapeError> for ParseResult {
    fn from(e: ShapeError) -> Self {
        let error = e.to_error_object();
        match e.kind() {
            MessageKind::ParseError => ParseResult::ParseError(error),
            _ => ParseResult::InvalidRequest(error),
        }
    }
}

pub type ShapeResult<T> = Result<T, ShapeError>;
