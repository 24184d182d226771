//! Transport layer: reading newline-delimited messages and writing results.

pub mod framing;
pub mod stdio;

pub use stdio::{LineClassifier, StreamSummary};
