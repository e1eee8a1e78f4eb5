//! Define the reserved keyword vocabulary of the Java language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; there are no aliases.
//! - `true`, `false` and `null` are *literals*, not keywords. See [`crate::lang::literals`].
//! - The eight primitive type names are keywords as well; [`crate::lang::primitives`] maps them to their descriptors.
//!
//! ## Examples
//! ```rust
//! use jls_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("extends"), Some(KeywordId::Extends));
//! assert_eq!(keywords::as_str(KeywordId::InstanceOf), "instanceof");
//! assert_eq!(keywords::category(KeywordId::Int), KeywordCategory::PrimitiveType);
//! assert_eq!(keywords::from_str("Extends"), None);
//! ```

use super::registry::{JLS, JlsSection};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordId {
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extends,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    InstanceOf,
    Int,
    Interface,
    Long,
    Native,
    New,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    StrictFp,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Void,
    Volatile,
    While,
}

/// High-level grouping for documentation and diagnostics.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Modifier,
    Declaration,
    Statement,
    Expression,
    /// `extends`, `super`, `implements`: the words that relate one type to another.
    TypeRelation,
    PrimitiveType,
    /// Reserved but without any meaning in the grammar (`const`, `goto`).
    Unused,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub defined_in: JlsSection,
}

/// Registry of all keywords, in alphabetical order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Abstract, "abstract", KeywordCategory::Modifier),
    info(KeywordId::Assert, "assert", KeywordCategory::Statement),
    info(KeywordId::Boolean, "boolean", KeywordCategory::PrimitiveType),
    info(KeywordId::Break, "break", KeywordCategory::Statement),
    info(KeywordId::Byte, "byte", KeywordCategory::PrimitiveType),
    info(KeywordId::Case, "case", KeywordCategory::Statement),
    info(KeywordId::Catch, "catch", KeywordCategory::Statement),
    info(KeywordId::Char, "char", KeywordCategory::PrimitiveType),
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    info(KeywordId::Const, "const", KeywordCategory::Unused),
    info(KeywordId::Continue, "continue", KeywordCategory::Statement),
    info(KeywordId::Default, "default", KeywordCategory::Statement),
    info(KeywordId::Do, "do", KeywordCategory::Statement),
    info(KeywordId::Double, "double", KeywordCategory::PrimitiveType),
    info(KeywordId::Else, "else", KeywordCategory::Statement),
    info(KeywordId::Enum, "enum", KeywordCategory::Declaration),
    info(KeywordId::Extends, "extends", KeywordCategory::TypeRelation),
    info(KeywordId::Final, "final", KeywordCategory::Modifier),
    info(KeywordId::Finally, "finally", KeywordCategory::Statement),
    info(KeywordId::Float, "float", KeywordCategory::PrimitiveType),
    info(KeywordId::For, "for", KeywordCategory::Statement),
    info(KeywordId::Goto, "goto", KeywordCategory::Unused),
    info(KeywordId::If, "if", KeywordCategory::Statement),
    info(KeywordId::Implements, "implements", KeywordCategory::TypeRelation),
    info(KeywordId::Import, "import", KeywordCategory::Declaration),
    info(KeywordId::InstanceOf, "instanceof", KeywordCategory::Expression),
    info(KeywordId::Int, "int", KeywordCategory::PrimitiveType),
    info(KeywordId::Interface, "interface", KeywordCategory::Declaration),
    info(KeywordId::Long, "long", KeywordCategory::PrimitiveType),
    info(KeywordId::Native, "native", KeywordCategory::Modifier),
    info(KeywordId::New, "new", KeywordCategory::Expression),
    info(KeywordId::Package, "package", KeywordCategory::Declaration),
    info(KeywordId::Private, "private", KeywordCategory::Modifier),
    info(KeywordId::Protected, "protected", KeywordCategory::Modifier),
    info(KeywordId::Public, "public", KeywordCategory::Modifier),
    info(KeywordId::Return, "return", KeywordCategory::Statement),
    info(KeywordId::Short, "short", KeywordCategory::PrimitiveType),
    info(KeywordId::Static, "static", KeywordCategory::Modifier),
    info(KeywordId::StrictFp, "strictfp", KeywordCategory::Modifier),
    info(KeywordId::Super, "super", KeywordCategory::TypeRelation),
    info(KeywordId::Switch, "switch", KeywordCategory::Statement),
    info(KeywordId::Synchronized, "synchronized", KeywordCategory::Modifier),
    info(KeywordId::This, "this", KeywordCategory::Expression),
    info(KeywordId::Throw, "throw", KeywordCategory::Statement),
    info(KeywordId::Throws, "throws", KeywordCategory::Declaration),
    info(KeywordId::Transient, "transient", KeywordCategory::Modifier),
    info(KeywordId::Try, "try", KeywordCategory::Statement),
    info(KeywordId::Void, "void", KeywordCategory::Declaration),
    info(KeywordId::Volatile, "volatile", KeywordCategory::Modifier),
    info(KeywordId::While, "while", KeywordCategory::Statement),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The keyword's [`KeywordCategory`].
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved keyword.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return `true` if `word` is a reserved keyword.
pub fn is_keyword(word: &str) -> bool {
    from_str(word).is_some()
}

/// Iterate over every keyword spelling in registry order.
pub fn spellings() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|k| k.canonical)
}

/// Call `f` once for every keyword spelling.
///
/// ## Examples
/// ```rust
/// let mut count = 0;
/// jls_core::lang::keywords::for_each_keyword(|_| count += 1);
/// assert_eq!(count, 50);
/// ```
pub fn for_each_keyword(f: impl FnMut(&'static str)) {
    spellings().for_each(f);
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        defined_in: JLS::KEYWORDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_fifty_keywords() {
        assert_eq!(KEYWORDS.len(), 50);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("while"), Some(KeywordId::While));
        assert_eq!(from_str("While"), None);
        assert_eq!(from_str("WHILE"), None);
    }

    #[test]
    fn test_literals_are_not_keywords() {
        assert!(!is_keyword("true"));
        assert!(!is_keyword("false"));
        assert!(!is_keyword("null"));
    }

    #[test]
    fn test_primitive_category() {
        let primitives: Vec<_> = KEYWORDS
            .iter()
            .filter(|k| k.category == KeywordCategory::PrimitiveType)
            .map(|k| k.canonical)
            .collect();
        assert_eq!(
            primitives,
            vec!["boolean", "byte", "char", "double", "float", "int", "long", "short"]
        );
    }
}
