//! Error types for the Monkey CLI.

use std::path::PathBuf;

use monkey_lexer::LexerError;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create editor: {0}")]
    Editor(ReadlineError),

    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Lex(#[from] LexerError),
}

pub type Result<T> = std::result::Result<T, CliError>;
