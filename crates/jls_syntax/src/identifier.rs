//! Lexical classification of identifiers and the validated [`Identifier`] value.
//!
//! An identifier is legal when it is non-empty, starts with an identifier-start character, continues with
//! identifier-part characters only, and is not a reserved word (keyword, boolean literal or `null`).

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use jls_core::lang;

use crate::diagnostics::{ParseError, Span, errors};
use crate::normalize::{self, Convention};

/// Check if a character can start an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '$' || c == '_'
}

/// Check if a character can continue an identifier.
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_numeric()
}

/// Return `true` if `text` is shaped like an identifier, ignoring reserved words.
pub fn is_legal_identifier_shape(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => is_identifier_start(first) && chars.all(is_identifier_part),
        None => false,
    }
}

/// Return `true` if `text` equals a keyword, a boolean literal or the null literal.
pub fn is_reserved(text: &str) -> bool {
    lang::is_reserved(text)
}

/// Return `true` if `text` can be used as an identifier.
pub fn is_legal_identifier(text: &str) -> bool {
    is_legal_identifier_shape(text) && !is_reserved(text)
}

/// Validate `text` as an identifier, reporting the first violated rule.
fn validate(text: &str) -> Result<(), ParseError> {
    let mut chars = text.char_indices();
    let Some((_, first)) = chars.next() else {
        return Err(errors::empty("identifier", text));
    };
    if !is_identifier_start(first) {
        return Err(errors::invalid_identifier_start(first, text));
    }
    if let Some((offset, c)) = chars.find(|&(_, c)| !is_identifier_part(c)) {
        return Err(errors::invalid_character(c, offset, "identifier", text));
    }
    if is_reserved(text) {
        return Err(errors::reserved_word(text, Span::new(0, text.len()), text));
    }
    Ok(())
}

/// A legal, non-reserved identifier.
///
/// ## Notes
/// - Instances only exist for legal text: every constructor validates, so holding an `Identifier` is proof.
/// - Equality, hashing and ordering are by the underlying text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Parse `text` as an identifier.
    ///
    /// ## Errors
    /// - [`ErrorKind::Empty`](crate::ErrorKind::Empty) for `""`.
    /// - [`ErrorKind::InvalidCharacter`](crate::ErrorKind::InvalidCharacter) for a character that cannot appear at
    ///   its position.
    /// - [`ErrorKind::ReservedWord`](crate::ErrorKind::ReservedWord) for keywords, `true`, `false` and `null`.
    ///
    /// ## Examples
    /// ```rust
    /// use jls_syntax::Identifier;
    ///
    /// assert_eq!(Identifier::parse("value").unwrap().as_str(), "value");
    /// assert!(Identifier::parse("class").is_err());
    /// assert!(Identifier::parse("9lives").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        validate(text).inspect_err(|e| tracing::debug!(input = text, error = %e, "rejected identifier"))?;
        Ok(Self(text.to_string()))
    }

    /// Wrap text the caller already knows to be a legal identifier.
    ///
    /// ## Panics
    /// - If `text` is not a legal identifier. This is a programming error, not an input error; use
    ///   [`Identifier::parse`] for untrusted text.
    pub fn from_known_legal(text: impl Into<String>) -> Self {
        let text = text.into();
        if let Err(e) = validate(&text) {
            panic!("illegal identifier '{text}': {e}");
        }
        Self(text)
    }

    /// Normalize arbitrary text into an identifier following `convention`.
    ///
    /// See [`crate::normalize::normalize`].
    pub fn normalize(text: &str, convention: Convention) -> Result<Self, ParseError> {
        normalize::normalize(text, convention)
    }

    /// Wrap lexer output that is legal by construction.
    pub(crate) fn from_lexeme(text: String) -> Self {
        debug_assert!(is_legal_identifier(&text), "lexer produced illegal identifier {text:?}");
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}
