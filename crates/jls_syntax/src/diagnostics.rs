//! Diagnostics for identifier and type-name parsing.
//!
//! Every grammar violation is reported as a single [`ParseError`]: a kind, a human-readable message naming the
//! offending text and the rule it breaks, and the byte [`Span`] of the input it was found at. The input travels with
//! the error so `miette` can render it with the offending region underlined.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Source location span (byte offsets into the parsed text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span, used for "end of input" positions.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// The rule a rejected input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Nothing to parse.
    Empty,
    /// A character that can never be part of the construct being parsed.
    InvalidCharacter,
    /// A keyword, boolean literal or the null literal where an identifier is required.
    ReservedWord,
    /// Normalization found no word characters at all.
    NoWords,
    UnexpectedToken,
    UnexpectedEndOfInput,
    /// A complete type name followed by more tokens.
    TrailingInput,
    /// A primitive type that is qualified, parameterized or used as a bare type argument.
    PrimitiveMisuse,
    /// Type arguments nested deeper than the configured limit.
    NestingTooDeep,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Empty => write!(f, "empty input"),
            ErrorKind::InvalidCharacter => write!(f, "invalid character"),
            ErrorKind::ReservedWord => write!(f, "reserved word"),
            ErrorKind::NoWords => write!(f, "no words"),
            ErrorKind::UnexpectedToken => write!(f, "unexpected token"),
            ErrorKind::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            ErrorKind::TrailingInput => write!(f, "unexpected trailing token"),
            ErrorKind::PrimitiveMisuse => write!(f, "misused primitive type"),
            ErrorKind::NestingTooDeep => write!(f, "nesting too deep"),
        }
    }
}

/// A grammar violation with location information.
///
/// ## Notes
/// - `Display` renders `"<message> (at offset <n>)"`; use the `miette` [`Diagnostic`] impl for a rendered snippet.
/// - Parsing is deterministic: the same input always yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message} (at offset {offset})", offset = .span.start)]
#[diagnostic(code(jls::parse))]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
    #[source_code]
    input: String,
    #[label("here")]
    label: SourceSpan,
    #[help]
    hint: Option<String>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: String, span: Span, input: &str) -> Self {
        Self {
            kind,
            message,
            span,
            input: input.to_string(),
            label: span.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Byte offset of the violation in the input.
    pub fn offset(&self) -> usize {
        self.span.start
    }

    /// The text that was being parsed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

// ============================================================================
// Error catalog
// ============================================================================

/// Constructors for the errors shared by the identifier, normalizer and type-name front ends.
pub mod errors {
    use super::*;
    use jls_core::lang::{literals, primitives::PrimitiveId};

    pub fn empty(what: &str, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::Empty,
            format!("{what} must not be empty"),
            Span::point(0),
            input,
        )
    }

    pub fn invalid_character(c: char, offset: usize, context: &str, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::InvalidCharacter,
            format!("invalid character '{c}' in {context}"),
            Span::new(offset, offset + c.len_utf8()),
            input,
        )
    }

    pub fn invalid_identifier_start(c: char, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::InvalidCharacter,
            format!("identifier cannot start with '{c}'"),
            Span::new(0, c.len_utf8()),
            input,
        )
        .with_hint("identifiers start with a letter, '$' or '_'")
    }

    pub fn reserved_word(word: &str, span: Span, input: &str) -> ParseError {
        let what = if literals::from_str(word).is_some() {
            "literal"
        } else {
            "keyword"
        };
        ParseError::new(
            ErrorKind::ReservedWord,
            format!("'{word}' is a reserved {what} and cannot be used as an identifier"),
            span,
            input,
        )
    }

    pub fn no_words(input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::NoWords,
            format!("'{input}' contains no words to build an identifier from"),
            Span::new(0, input.len()),
            input,
        )
    }

    pub fn unexpected_token(found: &str, expected: &str, span: Span, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::UnexpectedToken,
            format!("expected {expected}, found {found}"),
            span,
            input,
        )
    }

    pub fn unexpected_end(expected: &str, offset: usize, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::UnexpectedEndOfInput,
            format!("unexpected end of input, expected {expected}"),
            Span::point(offset),
            input,
        )
    }

    pub fn trailing_input(found: &str, span: Span, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::TrailingInput,
            format!("unexpected trailing token {found}"),
            span,
            input,
        )
    }

    pub fn primitive_with_arguments(primitive: PrimitiveId, span: Span, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::PrimitiveMisuse,
            format!(
                "primitive type '{}' cannot have type arguments",
                jls_core::lang::primitives::as_str(primitive)
            ),
            span,
            input,
        )
    }

    pub fn qualified_primitive(primitive: PrimitiveId, span: Span, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::PrimitiveMisuse,
            format!(
                "primitive type '{}' cannot be qualified by a package name",
                jls_core::lang::primitives::as_str(primitive)
            ),
            span,
            input,
        )
    }

    pub fn primitive_argument(primitive: PrimitiveId, span: Span, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::PrimitiveMisuse,
            format!(
                "primitive type '{}' cannot be used as a type argument",
                jls_core::lang::primitives::as_str(primitive)
            ),
            span,
            input,
        )
        .with_hint("use an array type or the corresponding reference type")
    }

    pub fn nesting_too_deep(max_depth: usize, span: Span, input: &str) -> ParseError {
        ParseError::new(
            ErrorKind::NestingTooDeep,
            format!("type argument nesting exceeds the limit of {max_depth}"),
            span,
            input,
        )
    }
}
