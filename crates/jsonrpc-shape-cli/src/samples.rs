//! Built-in sample messages covering each classification outcome.

use jsonrpc_shape::MessageKind;

/// One sample message and the outcome it should produce.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub description: &'static str,
    pub message: &'static str,
    pub expected: MessageKind,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        description: "Valid request",
        message: r#"{"jsonrpc": "2.0", "method": "initialize", "params": {"rootUri": null}, "id": 1}"#,
        expected: MessageKind::Request,
    },
    Sample {
        description: "Valid notification",
        message: r#"{"jsonrpc": "2.0", "method": "initialized", "params": {}}"#,
        expected: MessageKind::Notification,
    },
    Sample {
        description: "Valid response (result)",
        message: r#"{"jsonrpc": "2.0", "result": {"capabilities": {}}, "id": 1}"#,
        expected: MessageKind::Response,
    },
    Sample {
        description: "Valid response (error)",
        message: r#"{"jsonrpc": "2.0", "error": {"code": -32602, "message": "Invalid params"}, "id": 1}"#,
        expected: MessageKind::Response,
    },
    Sample {
        description: "Missing jsonrpc field",
        message: r#"{"method": "test", "id": 1}"#,
        expected: MessageKind::InvalidRequest,
    },
    Sample {
        description: "Wrong jsonrpc version",
        message: r#"{"jsonrpc": "1.0", "method": "test", "id": 1}"#,
        expected: MessageKind::InvalidRequest,
    },
    Sample {
        description: "Malformed JSON",
        message: r#"{"jsonrpc": "2.0", "method": "test", "id": 1"#,
        expected: MessageKind::ParseError,
    },
    Sample {
        description: "Response with both result and error",
        message: r#"{"jsonrpc": "2.0", "result": "success", "error": {"code": -1}, "id": 1}"#,
        expected: MessageKind::InvalidRequest,
    },
];
