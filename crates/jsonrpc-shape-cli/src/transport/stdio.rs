//! Line transport — reads newline-delimited messages, writes one result per
//! message.

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use jsonrpc_shape::{classify_bytes, ParseResult};

use crate::config::{Format, InputSource};
use crate::error::CliResult;
use crate::render::render;

use super::framing;

/// Counts of what a stream contained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    /// Input lines read, blank ones included.
    pub lines: usize,
    /// Messages classified.
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl StreamSummary {
    fn record(&mut self, result: &ParseResult) {
        self.total += 1;
        if result.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }
}

/// Classifies every non-blank line of an input stream.
pub struct LineClassifier {
    format: Format,
}

impl LineClassifier {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Read from `source` and write results to stdout.
    pub async fn run_source(&self, source: &InputSource) -> CliResult<StreamSummary> {
        let mut stdout = tokio::io::stdout();
        match source {
            InputSource::Stdin => {
                tracing::info!("Reading messages from stdin");
                self.run(BufReader::new(tokio::io::stdin()), &mut stdout)
                    .await
            }
            InputSource::File(path) => {
                tracing::info!("Reading messages from {}", path.display());
                let file = tokio::fs::File::open(path).await?;
                self.run(BufReader::new(file), &mut stdout).await
            }
        }
    }

    /// Run the classify loop until EOF on `reader`.
    ///
    /// Lines are taken as raw bytes so that invalid UTF-8 surfaces as a
    /// parse error for that line rather than ending the stream.
    pub async fn run<R, W>(&self, mut reader: R, writer: &mut W) -> CliResult<StreamSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = StreamSummary::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            let bytes_read = reader.read_until(b'\n', &mut line).await?;

            if bytes_read == 0 {
                tracing::debug!("EOF on input");
                break;
            }
            summary.lines += 1;

            let Some(message) = framing::message_in(&line) else {
                continue;
            };

            let result = classify_bytes(message);
            tracing::debug!(kind = %result.kind(), line = summary.lines, "Classified message");
            summary.record(&result);

            let framed = framing::frame_line(render(&result, self.format)?);
            writer.write_all(framed.as_bytes()).await?;
            writer.flush().await?;
        }

        tracing::info!(
            total = summary.total,
            valid = summary.valid,
            invalid = summary.invalid,
            "Stream finished"
        );
        Ok(summary)
    }
}
