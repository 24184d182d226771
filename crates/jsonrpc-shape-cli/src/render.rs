//! Rendering classification results for output.

use jsonrpc_shape::ParseResult;

use crate::config::Format;
use crate::error::CliResult;

/// Render one result as a single line, without the trailing newline.
pub fn render(result: &ParseResult, format: Format) -> CliResult<String> {
    match format {
        Format::Text => Ok(result.to_string()),
        Format::Json => Ok(serde_json::to_string(result)?),
    }
}
