//! jsonrpc-shape — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use jsonrpc_shape::{classify, error_response_for, ErrorCode};
use jsonrpc_shape_cli::config::{resolve_format, resolve_input, Format, DEFAULT_LOG_LEVEL};
use jsonrpc_shape_cli::render::render;
use jsonrpc_shape_cli::samples::SAMPLES;
use jsonrpc_shape_cli::transport::LineClassifier;

#[derive(Parser)]
#[command(
    name = "jsonrpc-shape",
    about = "Classify JSON-RPC 2.0 messages as request, notification, or response",
    version
)]
struct Cli {
    /// Output format (text, json). Also reads JSONRPC_SHAPE_FORMAT.
    #[arg(long, value_enum, global = true)]
    format: Option<Format>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single message given on the command line.
    Check {
        /// The raw message text.
        message: String,

        /// Also print the JSON-RPC error response a server would send back.
        #[arg(long)]
        respond: bool,
    },

    /// Classify newline-delimited messages from a file or stdin (default).
    Stream {
        /// Input file, `-` for stdin. Also reads JSONRPC_SHAPE_INPUT.
        #[arg(short, long)]
        input: Option<String>,

        /// Exit with status 1 if any message was rejected.
        #[arg(long)]
        strict: bool,
    },

    /// Classify the built-in sample messages.
    Samples,

    /// Print the JSON-RPC error code table as JSON.
    Codes,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   jsonrpc-shape completions bash > ~/.local/share/bash-completion/completions/jsonrpc-shape
    ///   jsonrpc-shape completions zsh > ~/.zfunc/_jsonrpc-shape
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = resolve_format(cli.format);

    match cli.command.unwrap_or(Commands::Stream {
        input: None,
        strict: false,
    }) {
        Commands::Check { message, respond } => {
            let result = classify(&message);
            println!("{}", render(&result, format)?);

            if respond {
                if let Some(response) = error_response_for(&message, &result) {
                    println!("{}", serde_json::to_string(&response)?);
                }
            }

            if !result.is_valid() {
                std::process::exit(1);
            }
        }

        Commands::Stream { input, strict } => {
            let source = resolve_input(input.as_deref());
            let summary = LineClassifier::new(format).run_source(&source).await?;
            if strict && summary.invalid > 0 {
                tracing::error!("{} of {} messages rejected", summary.invalid, summary.total);
                std::process::exit(1);
            }
        }

        Commands::Samples => {
            for (i, sample) in SAMPLES.iter().enumerate() {
                let result = classify(sample.message);
                match format {
                    Format::Text => {
                        println!("Sample {}: {}", i + 1, sample.description);
                        println!("  Input:  {}", sample.message);
                        println!("  Result: {result}");
                    }
                    Format::Json => {
                        let line = serde_json::json!({
                            "description": sample.description,
                            "input": sample.message,
                            "result": result,
                        });
                        println!("{line}");
                    }
                }
            }
        }

        Commands::Codes => {
            let codes: Vec<_> = ErrorCode::ALL
                .iter()
                .map(|c| serde_json::json!({ "code": c, "message": c.message() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&codes)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "jsonrpc-shape", &mut std::io::stdout());
        }

        Commands::Repl => {
            jsonrpc_shape_cli::repl::run(format)?;
        }
    }

    Ok(())
}
