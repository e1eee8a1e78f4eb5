//! Lexer for type names.
//!
//! Splits a type name into punctuation tokens (`.` `,` `?` `<` `>` `[` `]`) and identifier-shaped words, which are
//! resolved to keywords, literals or plain identifiers. Whitespace between tokens is discarded. Any other character
//! is reported immediately.

pub mod tokens;

pub use tokens::{Token, TokenKind, classify_word};

use crate::diagnostics::{ParseError, Span, errors};
use crate::identifier::{is_identifier_part, is_identifier_start};
use jls_core::lang::punctuation;

/// Lexer for type-name text.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    ///
    /// The token stream always ends with an `Eof` token. Lexing stops at the first invalid character.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        loop {
            self.skip_whitespace();
            let start = self.current_pos;
            let Some(c) = self.advance() else {
                break;
            };

            if let Some(id) = punctuation::from_char(c) {
                self.add_token(TokenKind::Punctuation(id), start);
            } else if is_identifier_start(c) {
                self.scan_word(start);
            } else {
                return Err(errors::invalid_character(c, start, "type name", self.source));
            }
        }

        self.tokens.push(Token::new(TokenKind::Eof, Span::point(self.current_pos)));
        Ok(self.tokens)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn scan_word(&mut self, start: usize) {
        while self.peek().is_some_and(is_identifier_part) {
            self.advance();
        }
        let kind = classify_word(&self.source[start..self.current_pos]);
        self.add_token(kind, start);
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }
}

/// Convenience function to tokenize type-name text.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).tokenize()
}
