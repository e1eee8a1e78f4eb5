//! Token types for the type-name lexer.
//!
//! Vocabulary tokens carry **registry-backed IDs** from `jls_core::lang`:
//! - `Keyword(KeywordId)` for reserved words (including the primitive type names)
//! - `Literal(LiteralId)` for `true`, `false` and `null`
//! - `Punctuation(PunctuationId)` for the single-character separators
//!
//! ## Notes
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::diagnostics::Span;
use jls_core::lang::keywords::{self, KeywordId};
use jls_core::lang::literals::{self, LiteralId};
use jls_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(KeywordId),
    Literal(LiteralId),
    Punctuation(PunctuationId),
    /// A legal, non-reserved identifier.
    Ident(String),
    Eof,
}

impl TokenKind {
    /// Human-readable description used in "found ..." diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("keyword '{}'", keywords::as_str(*id)),
            TokenKind::Literal(id) => format!("literal '{}'", literals::as_str(*id)),
            TokenKind::Punctuation(id) => punctuation::describe(*id).to_string(),
            TokenKind::Ident(name) => format!("identifier '{name}'"),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Classify an identifier-shaped word.
pub fn classify_word(word: &str) -> TokenKind {
    if let Some(id) = keywords::from_str(word) {
        TokenKind::Keyword(id)
    } else if let Some(id) = literals::from_str(word) {
        TokenKind::Literal(id)
    } else {
        TokenKind::Ident(word.to_string())
    }
}
