//! Monkey lexer - tokenization for the Monkey scripting language.
//!
//! This crate converts Monkey source text into a flat stream of tokens.
//! Lexing never fails: characters outside the language come back as
//! [`TokenKind::Illegal`] tokens, and the stream ends with a
//! [`TokenKind::EndOfInput`] token that repeats on every further call.
//!
//! # Example
//!
//! ```
//! use monkey_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("let five = 5;");
//! let token = lexer.next_token();
//! assert_eq!(token.kind, TokenKind::Let);
//! assert_eq!(token.literal, "let");
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, tokenize_strict, Lexer, LexerConfig, LexerError};
pub use token::{lookup_identifier, Token, TokenKind};
