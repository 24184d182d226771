//! Error types for the command-line front end.

/// Failures outside classification itself. A rejected message is not one
/// of these; it is a normal `ParseResult`.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type CliResult<T> = Result<T, CliError>;
