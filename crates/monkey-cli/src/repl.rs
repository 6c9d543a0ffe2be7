//! Interactive token printer.

use monkey_lexer::{Lexer, LexerConfig, Token};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::error::{CliError, Result};

const BANNER: &str = "Welcome to the Monkey Language";
const PROMPT: &str = "> ";

/// How source text gets lexed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub config: LexerConfig,
    /// Treat the first illegal character as an error.
    pub strict: bool,
}

/// Lex `source` through end of input.
pub fn lex(source: &str, options: &Options) -> Result<Vec<Token>> {
    let lexer = Lexer::with_config(source, options.config);
    if options.strict {
        Ok(lexer.strict_tokens()?)
    } else {
        Ok(lexer.collect())
    }
}

/// One token per line.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

pub fn start_repl(options: &Options) -> Result<()> {
    println!("{}", BANNER);

    let mut rl = DefaultEditor::new().map_err(CliError::Editor)?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "exit" || trimmed == "quit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed).ok(); // Ignore history errors

                match lex(&line, options) {
                    Ok(tokens) => print!("{}", render(&tokens)),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                debug!("end of input");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
