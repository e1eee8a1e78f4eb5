//! Punctuation vocabulary for type names.
//!
//! The separators that structure a type name: package access (`.`), type argument lists (`<`, `,`, `>`), array
//! suffixes (`[`, `]`) and the wildcard marker (`?`).
//!
//! ## Notes
//! - Lookup via [`from_char`] is exact; every token here is a single character.
//! - This module is vocabulary only. It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use jls_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char('?'), Some(PunctuationId::Question));
//! assert_eq!(punctuation::as_str(PunctuationId::LAngle), "<");
//! ```

use super::registry::{JLS, JlsSection};

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Dot,
    Comma,
    Question,
    LAngle,
    RAngle,
    LBracket,
    RBracket,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    /// Human-readable name used in diagnostics ("expected ...").
    pub description: &'static str,
    pub defined_in: JlsSection,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Dot, ".", "'.'", JLS::SEPARATORS),
    info(PunctuationId::Comma, ",", "','", JLS::SEPARATORS),
    info(PunctuationId::Question, "?", "wildcard '?'", JLS::TYPE_ARGUMENTS),
    info(PunctuationId::LAngle, "<", "'<'", JLS::TYPE_ARGUMENTS),
    info(PunctuationId::RAngle, ">", "'>'", JLS::TYPE_ARGUMENTS),
    info(PunctuationId::LBracket, "[", "'['", JLS::SEPARATORS),
    info(PunctuationId::RBracket, "]", "']'", JLS::SEPARATORS),
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Diagnostic description, e.g. `"'>'"`.
pub fn describe(id: PunctuationId) -> &'static str {
    info_for(id).description
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Lookup by character.
pub fn from_char(c: char) -> Option<PunctuationId> {
    let mut buf = [0u8; 4];
    from_str(c.encode_utf8(&mut buf))
}

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    description: &'static str,
    defined_in: JlsSection,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        description,
        defined_in,
    }
}
