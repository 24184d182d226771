//! JSON-RPC 2.0 error responses for rejected messages.

use serde::Serialize;
use serde_json::Value;

use crate::classify::is_valid_id;
use crate::types::{ErrorObject, ParseResult, JSONRPC_VERSION};

/// A JSON-RPC 2.0 error response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub error: ErrorObject,
}

impl ErrorResponse {
    pub fn new(id: Value, error: ErrorObject) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error,
        }
    }
}

impl ParseResult {
    /// Error response with a null id, or `None` when the message was valid.
    pub fn error_response(&self) -> Option<ErrorResponse> {
        self.error()
            .map(|error| ErrorResponse::new(Value::Null, error.clone()))
    }
}

/// Error response for `result`, echoing the id from `text` when one can be
/// recovered.
pub fn error_response_for(text: &str, result: &ParseResult) -> Option<ErrorResponse> {
    let error = result.error()?;
    Some(ErrorResponse::new(recover_id(text), error.clone()))
}

/// The `id` of a message object if it has a legal one, otherwise null.
pub fn recover_id(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(mut object)) => match object.remove("id") {
            Some(id) if is_valid_id(&id) => id,
            _ => Value::Null,
        },
        _ => Value::Null,
    }
}
