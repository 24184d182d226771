//! Interactive REPL for classifying JSON-RPC messages.
//!
//! Launch with `jsonrpc-shape repl`. Any line not starting with `/` is
//! classified as a message. Type `/help` for commands, Tab for completion.

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};

use jsonrpc_shape::{classify, error_response_for, ErrorCode};

use crate::config::Format;
use crate::error::CliResult;
use crate::render::render;
use crate::samples::SAMPLES;

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/samples", "Classify the built-in sample messages"),
    ("/format", "Show or set the output format (text, json)"),
    ("/respond", "Toggle printing error responses for rejected messages"),
    ("/codes", "List JSON-RPC error codes"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

const FORMATS: &[&str] = &["text", "json"];

/// REPL helper for tab completion.
#[derive(Default)]
struct ShapeHelper;

impl Completer for ShapeHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.starts_with('/') {
            return Ok((pos, Vec::new()));
        }

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<16} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        if let Some(arg) = input.strip_prefix("/format ") {
            let prefix_start = input.len() - arg.len();
            let matches: Vec<Pair> = FORMATS
                .iter()
                .filter(|f| f.starts_with(arg.trim()))
                .map(|f| Pair {
                    display: f.to_string(),
                    replacement: f.to_string(),
                })
                .collect();
            return Ok((prefix_start, matches));
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for ShapeHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for ShapeHelper {}
impl Validator for ShapeHelper {}
impl Helper for ShapeHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Session state.
struct ReplState {
    format: Format,
    respond: bool,
}

/// Run the interactive REPL.
pub fn run(format: Format) -> CliResult<()> {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mjsonrpc-shape v{}\x1b[0m \x1b[90m\u{2014} JSON-RPC 2.0 message classifier\x1b[0m",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!(
        "    Paste a message to classify it. \x1b[36m/\x1b[0m for commands, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<ShapeHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ShapeHelper));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = std::path::PathBuf::from(&home).join(".jsonrpc_shape_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let mut state = ReplState {
        format,
        respond: false,
    };
    let prompt = " \x1b[36mrpc>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let Some(input) = line.strip_prefix('/') else {
                    cmd_classify(line, &state);
                    continue;
                };
                if input.is_empty() {
                    cmd_help();
                    continue;
                }

                let mut parts = input.splitn(2, ' ');
                let cmd = parts.next().unwrap_or("");
                let args = parts.next().unwrap_or("").trim();

                match cmd {
                    "exit" | "quit" => {
                        eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                        break;
                    }
                    "help" | "h" | "?" => cmd_help(),
                    "clear" | "cls" => eprint!("\x1b[2J\x1b[H"),
                    "samples" => cmd_samples(&state),
                    "format" => cmd_format(args, &mut state),
                    "respond" => {
                        state.respond = !state.respond;
                        eprintln!(
                            "  Error responses {}",
                            if state.respond { "on" } else { "off" }
                        );
                    }
                    "codes" => cmd_codes(),
                    _ => {
                        eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  \x1b[90m\u{2728}\x1b[0m Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(&hist_path);

    Ok(())
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<18} {desc}");
    }
    eprintln!();
    eprintln!("  Anything else is classified as a JSON-RPC message.");
    eprintln!();
}

fn cmd_classify(text: &str, state: &ReplState) {
    let result = classify(text);
    match render(&result, state.format) {
        Ok(line) => println!("  {line}"),
        Err(e) => eprintln!("  Error: {e}"),
    }

    if state.respond {
        if let Some(response) = error_response_for(text, &result) {
            match serde_json::to_string(&response) {
                Ok(json) => println!("  \x1b[90m\u{2192}\x1b[0m {json}"),
                Err(e) => eprintln!("  Error: {e}"),
            }
        }
    }
}

fn cmd_samples(state: &ReplState) {
    eprintln!();
    for (i, sample) in SAMPLES.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, sample.description);
        cmd_classify(sample.message, state);
    }
    eprintln!();
}

fn cmd_format(args: &str, state: &mut ReplState) {
    if args.is_empty() {
        eprintln!("  Format: {:?}", state.format);
        return;
    }
    match args.parse::<Format>() {
        Ok(format) => {
            state.format = format;
            eprintln!("  Format set to {format:?}");
        }
        Err(e) => eprintln!("  {e}"),
    }
}

fn cmd_codes() {
    eprintln!();
    for code in ErrorCode::ALL {
        eprintln!("    {:<8} {}", code.code(), code.message());
    }
    eprintln!();
}
