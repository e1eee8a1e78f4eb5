//! Literal words that may never be used as identifiers.
//!
//! The grammar spells three literal values with identifier-shaped words: the boolean literals `true` and `false`,
//! and the null literal `null`. They are not keywords, but an identifier must not equal any of them.
//!
//! ## Examples
//! ```rust
//! use jls_core::lang::literals::{self, LiteralId};
//!
//! assert_eq!(literals::from_str("null"), Some(LiteralId::Null));
//! assert!(literals::is_boolean_literal("false"));
//! assert!(!literals::is_null_literal("NULL"));
//! ```

use super::registry::{JLS, JlsSection};

/// Stable identifier for the literal words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralId {
    True,
    False,
    Null,
}

/// Metadata for a literal word.
#[derive(Debug, Clone, Copy)]
pub struct LiteralInfo {
    pub id: LiteralId,
    pub canonical: &'static str,
    pub defined_in: JlsSection,
}

/// Registry of literal words: boolean literals first, then the null literal.
pub const LITERALS: &[LiteralInfo] = &[
    LiteralInfo {
        id: LiteralId::True,
        canonical: "true",
        defined_in: JLS::BOOLEAN_LITERALS,
    },
    LiteralInfo {
        id: LiteralId::False,
        canonical: "false",
        defined_in: JLS::BOOLEAN_LITERALS,
    },
    LiteralInfo {
        id: LiteralId::Null,
        canonical: "null",
        defined_in: JLS::NULL_LITERAL,
    },
];

/// The null literal spelling.
pub const NULL_LITERAL: &str = "null";

impl LiteralId {
    /// Return `true` for `true` and `false`.
    pub fn is_boolean(self) -> bool {
        matches!(self, LiteralId::True | LiteralId::False)
    }
}

/// Canonical spelling.
pub fn as_str(id: LiteralId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: LiteralId) -> &'static LiteralInfo {
    LITERALS.iter().find(|l| l.id == id).expect("literal info missing")
}

/// Lookup by spelling (case-sensitive).
pub fn from_str(s: &str) -> Option<LiteralId> {
    LITERALS.iter().find(|l| l.canonical == s).map(|l| l.id)
}

/// Return `true` if `word` is `true` or `false`.
pub fn is_boolean_literal(word: &str) -> bool {
    from_str(word).is_some_and(LiteralId::is_boolean)
}

/// Return `true` if `word` is `null`.
pub fn is_null_literal(word: &str) -> bool {
    word == NULL_LITERAL
}

/// Iterate over every literal spelling in registry order.
pub fn spellings() -> impl Iterator<Item = &'static str> {
    LITERALS.iter().map(|l| l.canonical)
}

/// Call `f` once for every literal spelling (`true`, `false`, `null`).
pub fn for_each_literal(f: impl FnMut(&'static str)) {
    spellings().for_each(f);
}
