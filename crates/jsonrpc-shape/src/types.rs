//! Classification outcome types for JSON-RPC 2.0 messages.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

/// JSON-RPC 2.0 protocol version.
pub const JSONRPC_VERSION: &str = "2.0";

/// A decoded JSON object, keys unique.
pub type JsonObject = Map<String, Value>;

/// What a message turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Request,
    Notification,
    Response,
    ParseError,
    InvalidRequest,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Request => "request",
            MessageKind::Notification => "notification",
            MessageKind::Response => "response",
            MessageKind::ParseError => "parse_error",
            MessageKind::InvalidRequest => "invalid_request",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(
            self,
            MessageKind::Request | MessageKind::Notification | MessageKind::Response
        )
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard JSON-RPC 2.0 error codes.
///
/// Only `ParseError` and `InvalidRequest` come out of the classifier. The
/// rest are here for callers that dispatch methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    ParseError = -32700,
    InvalidRequest = -32600,
    MethodNotFound = -32601,
    InvalidParams = -32602,
    InternalError = -32603,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::ParseError,
        ErrorCode::InvalidRequest,
        ErrorCode::MethodNotFound,
        ErrorCode::InvalidParams,
        ErrorCode::InternalError,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    /// The short message the JSON-RPC 2.0 document pairs with the code.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::ParseError => "Parse error",
            ErrorCode::InvalidRequest => "Invalid Request",
            ErrorCode::MethodNotFound => "Method not found",
            ErrorCode::InvalidParams => "Invalid params",
            ErrorCode::InternalError => "Internal error",
        }
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(code)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

/// Code and human-readable reason for a rejected message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
}

/// The outcome of classifying one message.
///
/// Valid variants hold the decoded object, invalid ones hold the error pair.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    Request(JsonObject),
    Notification(JsonObject),
    Response(JsonObject),
    ParseError(ErrorObject),
    InvalidRequest(ErrorObject),
}

impl ParseResult {
    pub fn kind(&self) -> MessageKind {
        match self {
            ParseResult::Request(_) => MessageKind::Request,
            ParseResult::Notification(_) => MessageKind::Notification,
            ParseResult::Response(_) => MessageKind::Response,
            ParseResult::ParseError(_) => MessageKind::ParseError,
            ParseResult::InvalidRequest(_) => MessageKind::InvalidRequest,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.kind().is_valid()
    }

    pub fn data(&self) -> Option<&JsonObject> {
        match self {
            ParseResult::Request(data)
            | ParseResult::Notification(data)
            | ParseResult::Response(data) => Some(data),
            ParseResult::ParseError(_) | ParseResult::InvalidRequest(_) => None,
        }
    }

    pub fn into_data(self) -> Option<JsonObject> {
        match self {
            ParseResult::Request(data)
            | ParseResult::Notification(data)
            | ParseResult::Response(data) => Some(data),
            ParseResult::ParseError(_) | ParseResult::InvalidRequest(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorObject> {
        match self {
            ParseResult::ParseError(error) | ParseResult::InvalidRequest(error) => Some(error),
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<i32> {
        self.error().map(|e| e.code)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error().map(|e| e.message.as_str())
    }

    /// Method name of a valid request or notification.
    pub fn method(&self) -> Option<&str> {
        match self {
            ParseResult::Request(data) | ParseResult::Notification(data) => {
                data.get("method").and_then(Value::as_str)
            }
            _ => None,
        }
    }

    /// The `id` of a valid request or response, exactly as it was sent.
    pub fn id(&self) -> Option<&Value> {
        match self {
            ParseResult::Request(data) | ParseResult::Response(data) => data.get("id"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseResult::Request(data)
            | ParseResult::Notification(data)
            | ParseResult::Response(data) => {
                let payload = serde_json::to_string(data).map_err(|_| std::fmt::Error)?;
                write!(f, "ParseResult(type={}, data={payload})", self.kind())
            }
            ParseResult::ParseError(error) | ParseResult::InvalidRequest(error) => write!(
                f,
                "ParseResult(type={}, error={}: {})",
                self.kind(),
                error.code,
                error.message
            ),
        }
    }
}

impl Serialize for ParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParseResult", 2)?;
        state.serialize_field("type", &self.kind())?;
        match self {
            ParseResult::Request(data)
            | ParseResult::Notification(data)
            | ParseResult::Response(data) => state.serialize_field("data", data)?,
            ParseResult::ParseError(error) | ParseResult::InvalidRequest(error) => {
                state.serialize_field("error", error)?
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(MessageKind::Request.to_string(), "request");
        assert_eq!(MessageKind::ParseError.to_string(), "parse_error");
        assert_eq!(
            serde_json::to_value(MessageKind::InvalidRequest).unwrap(),
            json!("invalid_request")
        );
    }

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ParseError.code(), -32700);
        assert_eq!(ErrorCode::InvalidRequest.code(), -32600);
        assert_eq!(ErrorCode::MethodNotFound.code(), -32601);
        assert_eq!(ErrorCode::InvalidParams.code(), -32602);
        assert_eq!(ErrorCode::InternalError.code(), -32603);
    }

    #[test]
    fn test_error_code_try_from() {
        assert_eq!(ErrorCode::try_from(-32602), Ok(ErrorCode::InvalidParams));
        assert_eq!(ErrorCode::try_from(-1), Err(-1));
    }

    #[test]
    fn test_valid_result_has_no_error() {
        let result = ParseResult::Request(object(json!({"jsonrpc": "2.0", "method": "a", "id": 7})));
        assert!(result.is_valid());
        assert!(result.error().is_none());
        assert_eq!(result.method(), Some("a"));
        assert_eq!(result.id(), Some(&json!(7)));
    }

    #[test]
    fn test_invalid_result_has_no_data() {
        let result = ParseResult::InvalidRequest(ErrorObject {
            code: -32600,
            message: "Invalid Request: method must be a string".to_string(),
        });
        assert!(!result.is_valid());
        assert!(result.data().is_none());
        assert_eq!(result.error_code(), Some(-32600));
        assert!(result.method().is_none());
    }

    #[test]
    fn test_display_valid() {
        let result = ParseResult::Notification(object(json!({"method": "x"})));
        assert_eq!(
            result.to_string(),
            r#"ParseResult(type=notification, data={"method":"x"})"#
        );
    }

    #[test]
    fn test_display_invalid() {
        let result = ParseResult::ParseError(ErrorObject {
            code: -32700,
            message: "Parse error: oops".to_string(),
        });
        assert_eq!(
            result.to_string(),
            "ParseResult(type=parse_error, error=-32700: Parse error: oops)"
        );
    }

    #[test]
    fn test_serialize_report() {
        let valid = ParseResult::Response(object(json!({"id": 1, "result": null})));
        assert_eq!(
            serde_json::to_value(&valid).unwrap(),
            json!({"type": "response", "data": {"id": 1, "result": null}})
        );

        let invalid = ParseResult::InvalidRequest(ErrorObject {
            code: -32600,
            message: "nope".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&invalid).unwrap(),
            json!({"type": "invalid_request", "error": {"code": -32600, "message": "nope"}})
        );
    }
}
