//! JSON-RPC 2.0 message classification.
//!
//! Three stages run in order, each either stopping with a rejection or
//! handing the decoded value on: decode, envelope check, shape detection
//! followed by field-type checks.

use serde_json::Value;

use crate::error::{ShapeError, ShapeResult};
use crate::types::{JsonObject, ParseResult, JSONRPC_VERSION};

/// The three valid message shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Request,
    Notification,
    Response,
}

impl Shape {
    fn into_result(self, object: JsonObject) -> ParseResult {
        match self {
            Shape::Request => ParseResult::Request(object),
            Shape::Notification => ParseResult::Notification(object),
            Shape::Response => ParseResult::Response(object),
        }
    }
}

/// Classify one JSON-RPC message from its text.
pub fn classify(text: &str) -> ParseResult {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => classify_value(value),
        Err(e) => ShapeError::from(e).into(),
    }
}

/// Classify raw bytes. Invalid UTF-8 is reported as a parse error.
pub fn classify_bytes(bytes: &[u8]) -> ParseResult {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => classify_value(value),
        Err(e) => ShapeError::from(e).into(),
    }
}

/// Classify an already decoded value, skipping the decode stage.
pub fn classify_value(value: Value) -> ParseResult {
    validate(value).unwrap_or_else(ParseResult::from)
}

fn validate(value: Value) -> ShapeResult<ParseResult> {
    let object = check_envelope(value)?;
    let shape = detect_shape(&object)?;
    check_fields(shape, &object)?;
    Ok(shape.into_result(object))
}

fn check_envelope(value: Value) -> ShapeResult<JsonObject> {
    let Value::Object(object) = value else {
        return Err(ShapeError::NotAnObject);
    };
    match object.get("jsonrpc") {
        Some(Value::String(version)) if version == JSONRPC_VERSION => Ok(object),
        _ => Err(ShapeError::VersionMismatch),
    }
}

/// Decide the shape from key presence alone. Values are not inspected here.
fn detect_shape(object: &JsonObject) -> ShapeResult<Shape> {
    if is_request(object) {
        Ok(Shape::Request)
    } else if is_notification(object) {
        Ok(Shape::Notification)
    } else if is_response(object) {
        Ok(Shape::Response)
    } else {
        Err(ShapeError::UnknownShape)
    }
}

fn is_request(object: &JsonObject) -> bool {
    object.contains_key("method")
        && object.contains_key("id")
        && !object.contains_key("result")
        && !object.contains_key("error")
}

fn is_notification(object: &JsonObject) -> bool {
    object.contains_key("method")
        && !object.contains_key("id")
        && !object.contains_key("result")
        && !object.contains_key("error")
}

fn is_response(object: &JsonObject) -> bool {
    object.contains_key("id")
        && !object.contains_key("method")
        && (object.contains_key("result") != object.contains_key("error"))
}

fn check_fields(shape: Shape, object: &JsonObject) -> ShapeResult<()> {
    if matches!(shape, Shape::Request | Shape::Notification)
        && !matches!(object.get("method"), Some(Value::String(_)))
    {
        return Err(ShapeError::MethodNotString);
    }

    if matches!(shape, Shape::Request | Shape::Response) {
        if let Some(id) = object.get("id") {
            if !is_valid_id(id) {
                return Err(ShapeError::InvalidId);
            }
        }
    }

    if shape == Shape::Response {
        if let Some(error) = object.get("error") {
            if !error.is_object() {
                return Err(ShapeError::ErrorNotObject);
            }
        }
    }

    Ok(())
}

/// Ids may be strings, numbers of any representation, or null.
pub(crate) fn is_valid_id(id: &Value) -> bool {
    matches!(id, Value::String(_) | Value::Number(_) | Value::Null)
}
