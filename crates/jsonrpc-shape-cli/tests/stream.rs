//! Integration tests for the line classifier.

use std::io::Write;

use serde_json::Value;
use tokio::io::BufReader;

use jsonrpc_shape_cli::config::{Format, InputSource};
use jsonrpc_shape_cli::transport::{LineClassifier, StreamSummary};

// ─────────────────────── helpers ───────────────────────

/// Run the classifier over in-memory input and return (summary, output lines).
async fn run_lines(input: &[u8], format: Format) -> (StreamSummary, Vec<String>) {
    let mut out = Vec::new();
    let summary = LineClassifier::new(format)
        .run(input, &mut out)
        .await
        .expect("stream should not fail");
    let text = String::from_utf8(out).expect("output is UTF-8");
    (summary, text.lines().map(str::to_string).collect())
}

/// Parse one JSON output line.
fn report(line: &str) -> Value {
    serde_json::from_str(line).expect("json report line")
}

// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn test_one_result_per_message() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","method":"initialize","id":1}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","result":{},"id":1}"#,
        "\n",
    );
    let (summary, lines) = run_lines(input.as_bytes(), Format::Json).await;

    assert_eq!(
        summary,
        StreamSummary {
            lines: 3,
            total: 3,
            valid: 3,
            invalid: 0
        }
    );
    let kinds: Vec<Value> = lines.iter().map(|l| report(l)["type"].clone()).collect();
    assert_eq!(kinds, vec!["request", "notification", "response"]);
}

#[tokio::test]
async fn test_blank_lines_are_skipped() {
    let input = b"\n   \n{\"jsonrpc\":\"2.0\",\"method\":\"m\"}\r\n\n";
    let (summary, lines) = run_lines(input, Format::Text).await;
    assert_eq!(summary.lines, 4);
    assert_eq!(summary.total, 1);
    assert_eq!(
        lines,
        vec![r#"ParseResult(type=notification, data={"jsonrpc":"2.0","method":"m"})"#]
    );
}

#[tokio::test]
async fn test_rejections_do_not_stop_the_stream() {
    let input = concat!(
        "{\"jsonrpc\":\"2.0\",\"method\":\"test\",\"id\":1\n",
        "[1,2,3]\n",
        "{\"method\":\"test\",\"id\":1}\n",
        "{\"jsonrpc\":\"2.0\",\"method\":\"ok\"}",
    );
    let (summary, lines) = run_lines(input.as_bytes(), Format::Json).await;

    assert_eq!(summary.total, 4);
    assert_eq!(summary.invalid, 3);
    assert_eq!(report(&lines[0])["error"]["code"], -32700);
    assert_eq!(
        report(&lines[1])["error"]["message"],
        "Invalid Request: message must be a JSON object"
    );
    assert_eq!(report(&lines[2])["type"], "invalid_request");
    assert_eq!(report(&lines[3])["type"], "notification");
}

#[tokio::test]
async fn test_invalid_utf8_line_is_a_parse_error() {
    let mut input = b"{\"jsonrpc\":\"2.0\",\"method\":\"".to_vec();
    input.extend_from_slice(&[0xff, 0xfe]);
    input.extend_from_slice(b"\"}\n{\"jsonrpc\":\"2.0\",\"method\":\"m\"}\n");

    let (summary, lines) = run_lines(&input, Format::Json).await;
    assert_eq!(summary.total, 2);
    assert_eq!(report(&lines[0])["type"], "parse_error");
    assert_eq!(report(&lines[1])["type"], "notification");
}

#[tokio::test]
async fn test_message_split_across_reads() {
    let mock = tokio_test::io::Builder::new()
        .read(b"{\"jsonrpc\":\"2.0\",")
        .read(b"\"method\":\"ping\",\"id\":7}\n{\"jsonrpc\"")
        .read(b":\"2.0\",\"result\":null,\"id\":7}\n")
        .build();

    let mut out = Vec::new();
    let summary = LineClassifier::new(Format::Json)
        .run(BufReader::new(mock), &mut out)
        .await
        .unwrap();

    assert_eq!(summary.valid, 2);
    let text = String::from_utf8(out).unwrap();
    let kinds: Vec<Value> = text.lines().map(|l| report(l)["type"].clone()).collect();
    assert_eq!(kinds, vec!["request", "response"]);
}

#[tokio::test]
async fn test_empty_input() {
    let (summary, lines) = run_lines(b"", Format::Text).await;
    assert_eq!(summary, StreamSummary::default());
    assert!(lines.is_empty());
}

#[tokio::test]
async fn test_missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = InputSource::File(dir.path().join("absent.ndjson"));
    let result = LineClassifier::new(Format::Text).run_source(&source).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_file_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"jsonrpc":"2.0","method":"a","id":"x"}}"#).unwrap();
    writeln!(file, r#"{{"jsonrpc":"2.0","error":"bad","id":"x"}}"#).unwrap();
    file.flush().unwrap();

    let handle = tokio::fs::File::open(file.path()).await.unwrap();
    let mut out = Vec::new();
    let summary = LineClassifier::new(Format::Text)
        .run(BufReader::new(handle), &mut out)
        .await
        .unwrap();

    assert_eq!(summary.valid, 1);
    assert_eq!(summary.invalid, 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with(
        "ParseResult(type=invalid_request, error=-32600: Invalid Request: error must be an object)\n"
    ));
}
