//! Lexer for the Monkey scripting language.

use crate::token::{lookup_identifier, Token, TokenKind};
use thiserror::Error;
use tracing::{debug, trace};

/// Sentinel stored in `ch` once the cursor has run past the input.
const EOF: char = '\0';

/// Errors reported by strict tokenization.
///
/// Plain lexing never fails; unrecognized characters come back as
/// [`TokenKind::Illegal`] tokens. These errors only surface when a caller
/// opts into [`tokenize_strict`] or [`Lexer::strict_tokens`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Illegal character {ch:?} at line {line}, column {column}")]
    IllegalCharacter {
        ch: char,
        offset: usize,
        line: usize,
        column: usize,
    },
}

/// Lexer options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Let `-` continue an identifier, so `foo-bar` scans as one identifier.
    /// A `-` at the start of a token is still [`TokenKind::Minus`].
    pub dash_in_identifiers: bool,
}

/// How far the cursor still has to move after a token has been classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Consumed {
    /// Fixed-width token still under the cursor.
    Fixed(usize),
    /// Variable-width token, already read past.
    Scanned,
    /// End of input.
    Nothing,
}

/// Lexer tokenizes Monkey source code.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    read_position: usize,
    ch: char,
    token_start: usize,
    config: LexerConfig,
    finished: bool,
}

impl Lexer {
    /// Create a new lexer for the given input.
    pub fn new(input: &str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    /// Create a new lexer with explicit options.
    pub fn with_config(input: &str, config: LexerConfig) -> Self {
        let mut lexer = Self {
            chars: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: EOF,
            token_start: 0,
            config,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Char offset at which the most recently returned token started.
    pub fn offset(&self) -> usize {
        self.token_start
    }

    /// Read the next character.
    fn read_char(&mut self) {
        if self.read_position >= self.chars.len() {
            self.ch = EOF;
        } else {
            self.ch = self.chars[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Peek at the next character without consuming it.
    fn peek_char(&self) -> char {
        if self.read_position >= self.chars.len() {
            EOF
        } else {
            self.chars[self.read_position]
        }
    }

    /// True once the cursor is past the last character. Tells the sentinel
    /// apart from a literal NUL in the input.
    fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() && is_whitespace(self.ch) {
            self.read_char();
        }
    }

    fn is_letter(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_' || (self.config.dash_in_identifiers && ch == '-')
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_start = self.position.min(self.chars.len());

        let (token, consumed) = self.scan();
        match consumed {
            Consumed::Fixed(width) => {
                for _ in 0..width {
                    self.read_char();
                }
            }
            Consumed::Scanned | Consumed::Nothing => {}
        }

        trace!(kind = %token.kind, literal = %token.literal, offset = self.token_start, "token");
        token
    }

    /// Classify the character under the cursor.
    fn scan(&mut self) -> (Token, Consumed) {
        match self.ch {
            '=' => {
                if self.peek_char() == '=' {
                    (Token::new(TokenKind::Equal, "=="), Consumed::Fixed(2))
                } else {
                    (Token::new(TokenKind::Assign, "="), Consumed::Fixed(1))
                }
            }
            '!' => {
                if self.peek_char() == '=' {
                    (Token::new(TokenKind::NotEqual, "!="), Consumed::Fixed(2))
                } else {
                    (Token::new(TokenKind::Bang, "!"), Consumed::Fixed(1))
                }
            }
            ';' => self.single(TokenKind::Semicolon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            ',' => self.single(TokenKind::Comma),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '/' => self.single(TokenKind::Slash),
            '*' => self.single(TokenKind::Asterisk),
            '<' => self.single(TokenKind::LessThan),
            '>' => self.single(TokenKind::GreaterThan),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            EOF if self.at_end() => (Token::new(TokenKind::EndOfInput, ""), Consumed::Nothing),
            ch if self.is_letter(ch) => {
                let literal = self.read_identifier();
                (Token::new(lookup_identifier(&literal), literal), Consumed::Scanned)
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_number();
                (Token::new(TokenKind::IntegerLiteral, literal), Consumed::Scanned)
            }
            _ => (Token::new(TokenKind::Illegal, ""), Consumed::Fixed(1)),
        }
    }

    fn single(&self, kind: TokenKind) -> (Token, Consumed) {
        (Token::new(kind, self.ch.to_string()), Consumed::Fixed(1))
    }

    /// Read an identifier or keyword.
    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while !self.at_end() && self.is_letter(self.ch) {
            self.read_char();
        }
        self.chars[start..self.position].iter().collect()
    }

    /// Read a run of decimal digits.
    fn read_number(&mut self) -> String {
        let start = self.position;
        while !self.at_end() && self.ch.is_ascii_digit() {
            self.read_char();
        }
        self.chars[start..self.position].iter().collect()
    }

    /// 1-indexed line and column of a char offset.
    fn line_column(&self, offset: usize) -> (usize, usize) {
        let before = &self.chars[..offset.min(self.chars.len())];
        let line = before.iter().filter(|&&c| c == '\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        (line, offset - line_start + 1)
    }

    /// Collect every token through end of input, failing on the first
    /// illegal character.
    pub fn strict_tokens(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            if tok.kind == TokenKind::Illegal {
                let offset = self.token_start;
                let (line, column) = self.line_column(offset);
                return Err(LexerError::IllegalCharacter {
                    ch: self.chars[offset],
                    offset,
                    line,
                    column,
                });
            }
            let is_eof = tok.is_eof();
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

/// Yields every token up to and including the first end-of-input token.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let tok = self.next_token();
        if tok.is_eof() {
            self.finished = true;
        }
        Some(tok)
    }
}

impl std::iter::FusedIterator for Lexer {}

/// Whitespace between tokens: ASCII whitespace plus vertical tab.
fn is_whitespace(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}

/// Tokenize an input string into a vector of tokens, ending with
/// [`TokenKind::EndOfInput`].
pub fn tokenize(input: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(input).collect();
    debug!(count = tokens.len(), "tokenized input");
    tokens
}

/// Like [`tokenize`], but the first illegal character is an error.
pub fn tokenize_strict(input: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(input).strict_tokens()
}
