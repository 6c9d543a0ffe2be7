//! Monkey CLI - tokenizes Monkey source and prints the tokens.

mod error;
mod repl;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use monkey_lexer::LexerConfig;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{CliError, Result};
use repl::Options;

/// Tokenize Monkey source code.
///
/// With no file and no `-e`, starts an interactive session that prints the
/// tokens of every line entered.
#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize Monkey source code", long_about = None)]
struct Cli {
    /// Source file to tokenize
    file: Option<PathBuf>,

    /// Tokenize source given on the command line
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "file")]
    eval: Option<String>,

    /// Start the REPL after tokenizing a file or -e source
    #[arg(short, long)]
    interactive: bool,

    /// Fail on the first illegal character instead of printing ILLEGAL
    #[arg(long, env = "MONKEY_STRICT")]
    strict: bool,

    /// Let `-` continue an identifier (`foo-bar` is one identifier)
    #[arg(long, env = "MONKEY_DASH_IDENTIFIERS")]
    dash_identifiers: bool,

    /// Enable verbose logging
    #[arg(short, long, env = "MONKEY_VERBOSE")]
    verbose: bool,

    /// Disable color output in logs
    #[arg(long, env = "MONKEY_NO_COLOR")]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let options = Options {
        config: LexerConfig {
            dash_in_identifiers: cli.dash_identifiers,
        },
        strict: cli.strict,
    };
    debug!(?options, "starting");

    let source = match (cli.eval, cli.file) {
        (Some(code), _) => Some(code),
        (None, Some(path)) => {
            debug!(path = %path.display(), "reading source file");
            let code = fs::read_to_string(&path).map_err(|source| CliError::ReadFile {
                path: path.clone(),
                source,
            })?;
            Some(code)
        }
        (None, None) => None,
    };

    match source {
        Some(code) => {
            let tokens = repl::lex(&code, &options)?;
            print!("{}", repl::render(&tokens));
            if cli.interactive {
                repl::start_repl(&options)?;
            }
        }
        None => repl::start_repl(&options)?,
    }

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
