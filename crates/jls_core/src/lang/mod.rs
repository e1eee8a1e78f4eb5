//! Java language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, literal words, primitive type
//! names and type-name punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `PrimitiveId`) and look up spellings and metadata via the
//! registry tables, instead of scattering string comparisons across the parser.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - Membership tests are plain functions over a word. Callers that need richer queries compose them with the
//!   enumeration helpers (`keywords::spellings`, `literals::for_each_literal`, ...).
//!
//! ## Examples
//! ```rust
//! use jls_core::lang;
//!
//! assert!(lang::is_reserved("goto"));
//! assert!(lang::is_reserved("true"));
//! assert!(!lang::is_reserved("String"));
//! ```

pub mod keywords;
pub mod literals;
pub mod primitives;
pub mod punctuation;
pub mod registry;

pub use keywords::{KeywordId, is_keyword};
pub use literals::{LiteralId, is_boolean_literal, is_null_literal};
pub use primitives::{PrimitiveId, is_primitive_type_name};
pub use punctuation::PunctuationId;

/// Return `true` if `word` is a keyword, a boolean literal or the null literal.
///
/// ## Notes
/// - This is the set of words no identifier may equal.
pub fn is_reserved(word: &str) -> bool {
    is_keyword(word) || literals::from_str(word).is_some()
}

/// Iterate over every reserved word: all keywords followed by all literal words.
pub fn reserved_words() -> impl Iterator<Item = &'static str> {
    keywords::spellings().chain(literals::spellings())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words_cover_keywords_and_literals() {
        assert_eq!(reserved_words().count(), 53);
        assert!(reserved_words().all(is_reserved));
    }

    #[test]
    fn test_reserved_is_case_sensitive() {
        for word in reserved_words() {
            assert!(!is_reserved(&word.to_uppercase()), "{word}");
        }
    }
}
