//! Configuration loading and resolution.

use std::path::PathBuf;

/// Env var naming the default input file for `stream`.
pub const INPUT_ENV: &str = "JSONRPC_SHAPE_INPUT";

/// Env var naming the default output format.
pub const FORMAT_ENV: &str = "JSONRPC_SHAPE_FORMAT";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How classification results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// `ParseResult(type=..., ...)` lines.
    #[default]
    Text,
    /// One JSON report object per line.
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{other}' (expected text or json)")),
        }
    }
}

/// Where `stream` reads messages from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Resolve the input source: explicit path, then env var, then stdin.
pub fn resolve_input(explicit: Option<&str>) -> InputSource {
    let chosen = explicit
        .map(str::to_string)
        .or_else(|| std::env::var(INPUT_ENV).ok());
    input_from(chosen.as_deref())
}

fn input_from(path: Option<&str>) -> InputSource {
    match path.map(str::trim) {
        None | Some("") | Some("-") => InputSource::Stdin,
        Some(path) => InputSource::File(PathBuf::from(path)),
    }
}

/// Resolve the output format: explicit flag, then env var, then text.
pub fn resolve_format(explicit: Option<Format>) -> Format {
    if let Some(format) = explicit {
        return format;
    }

    match std::env::var(FORMAT_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|e: String| {
            tracing::warn!("Ignoring {FORMAT_ENV}: {e}");
            Format::default()
        }),
        Err(_) => Format::default(),
    }
}
