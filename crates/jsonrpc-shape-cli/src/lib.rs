//! jsonrpc-shape CLI — classify JSON-RPC 2.0 messages one at a time, as a
//! newline-delimited stream, or interactively.

pub mod config;
pub mod error;
pub mod render;
pub mod repl;
pub mod samples;
pub mod transport;

pub use config::{resolve_format, resolve_input, Format, InputSource};
pub use error::{CliError, CliResult};
pub use transport::{LineClassifier, StreamSummary};
