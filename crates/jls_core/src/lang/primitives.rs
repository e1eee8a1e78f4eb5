//! Primitive type vocabulary.
//!
//! The eight primitive type names, each paired with the one-letter descriptor the runtime uses to spell arrays of
//! that type in binary class names (`int[][]` is `[[I`).
//!
//! ## Notes
//! - Every primitive type name is also a reserved keyword; [`keyword`] maps between the two registries.
//! - `void` is deliberately absent: it is not a type a value can have.
//!
//! ## Examples
//! ```rust
//! use jls_core::lang::primitives::{self, PrimitiveId};
//!
//! assert_eq!(primitives::from_str("long"), Some(PrimitiveId::Long));
//! assert_eq!(primitives::descriptor(PrimitiveId::Long), 'J');
//! assert_eq!(primitives::from_str("void"), None);
//! ```

use super::keywords::KeywordId;
use super::registry::{JLS, JlsSection};

/// Stable identifier for the primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveId {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveId,
    pub canonical: &'static str,
    pub keyword: KeywordId,
    /// Binary name code used inside array descriptors.
    pub descriptor: char,
    pub defined_in: JlsSection,
}

/// Registry of primitive types, in alphabetical order.
pub const PRIMITIVE_TYPES: &[PrimitiveInfo] = &[
    info(PrimitiveId::Boolean, "boolean", KeywordId::Boolean, 'Z'),
    info(PrimitiveId::Byte, "byte", KeywordId::Byte, 'B'),
    info(PrimitiveId::Char, "char", KeywordId::Char, 'C'),
    info(PrimitiveId::Double, "double", KeywordId::Double, 'D'),
    info(PrimitiveId::Float, "float", KeywordId::Float, 'F'),
    info(PrimitiveId::Int, "int", KeywordId::Int, 'I'),
    info(PrimitiveId::Long, "long", KeywordId::Long, 'J'),
    info(PrimitiveId::Short, "short", KeywordId::Short, 'S'),
];

/// Canonical spelling.
pub fn as_str(id: PrimitiveId) -> &'static str {
    info_for(id).canonical
}

/// Binary descriptor code (`Z`, `B`, `C`, `D`, `F`, `I`, `J`, `S`).
pub fn descriptor(id: PrimitiveId) -> char {
    info_for(id).descriptor
}

/// The keyword that spells this primitive type.
pub fn keyword(id: PrimitiveId) -> KeywordId {
    info_for(id).keyword
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveId) -> &'static PrimitiveInfo {
    PRIMITIVE_TYPES
        .iter()
        .find(|p| p.id == id)
        .expect("primitive type info missing")
}

/// Lookup by spelling (case-sensitive).
pub fn from_str(s: &str) -> Option<PrimitiveId> {
    PRIMITIVE_TYPES.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Lookup by keyword.
///
/// ## Returns
/// - `Some(PrimitiveId)` for the eight primitive keywords, `None` for every other keyword.
pub fn from_keyword(id: KeywordId) -> Option<PrimitiveId> {
    PRIMITIVE_TYPES.iter().find(|p| p.keyword == id).map(|p| p.id)
}

/// Return `true` if `word` names a primitive type.
pub fn is_primitive_type_name(word: &str) -> bool {
    from_str(word).is_some()
}

/// Iterate over every primitive type spelling in registry order.
pub fn spellings() -> impl Iterator<Item = &'static str> {
    PRIMITIVE_TYPES.iter().map(|p| p.canonical)
}

/// Call `f` once for every primitive type spelling.
pub fn for_each_primitive_type(f: impl FnMut(&'static str)) {
    spellings().for_each(f);
}

const fn info(id: PrimitiveId, canonical: &'static str, keyword: KeywordId, descriptor: char) -> PrimitiveInfo {
    PrimitiveInfo {
        id,
        canonical,
        keyword,
        descriptor,
        defined_in: JLS::PRIMITIVE_TYPES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::keywords;

    #[test]
    fn test_every_primitive_is_a_keyword_with_the_same_spelling() {
        for p in PRIMITIVE_TYPES {
            assert_eq!(keywords::as_str(p.keyword), p.canonical);
            assert_eq!(from_keyword(p.keyword), Some(p.id));
        }
    }

    #[test]
    fn test_descriptors() {
        let codes: String = PRIMITIVE_TYPES.iter().map(|p| p.descriptor).collect();
        assert_eq!(codes, "ZBCDFIJS");
    }

    #[test]
    fn test_non_primitive_keyword() {
        assert_eq!(from_keyword(KeywordId::Void), None);
        assert_eq!(from_keyword(KeywordId::Class), None);
    }
}
