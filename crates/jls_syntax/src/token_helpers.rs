//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites.

use crate::lexer::{Token, TokenKind};
use jls_core::lang::keywords::KeywordId;
use jls_core::lang::primitives::{self, PrimitiveId};
use jls_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the primitive type, if this is a primitive-type keyword.
    pub fn primitive_id(&self) -> Option<PrimitiveId> {
        self.keyword_id().and_then(primitives::from_keyword)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return the identifier text, if this is an identifier token.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Return `true` for reserved words that are not primitive types (keywords and literals).
    pub fn is_reserved_word(&self) -> bool {
        match self {
            TokenKind::Keyword(id) => primitives::from_keyword(*id).is_none(),
            TokenKind::Literal(_) => true,
            _ => false,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.is_punctuation(id)`.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.kind.is_punctuation(id)
    }

    /// Convenience wrapper for `self.kind.primitive_id()`.
    pub fn primitive_id(&self) -> Option<PrimitiveId> {
        self.kind.primitive_id()
    }
}
