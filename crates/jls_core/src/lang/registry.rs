//! Shareable metadata for `jls_core::lang` registries.
//!
//! Every vocabulary item records the chapter of the Java Language Specification that defines it. The metadata is
//! meant for diagnostics and documentation; enforcement of syntax rules lives in `jls_syntax`.

/// Identify the JLS section that defines a vocabulary item.
///
/// ## Notes
/// - The canonical format is `"JLS 3.9"` (Java SE 7 edition numbering).
pub type JlsSection = &'static str;

/// Namespace-style access to the JLS sections referenced by the registries.
///
/// ## Examples
/// ```rust
/// use jls_core::lang::registry::JLS;
///
/// assert_eq!(JLS::KEYWORDS, "JLS 3.9");
/// ```
pub struct JLS;

impl JLS {
    /// JLS 3.9: keywords.
    pub const KEYWORDS: JlsSection = "JLS 3.9";
    /// JLS 3.10.3: boolean literals.
    pub const BOOLEAN_LITERALS: JlsSection = "JLS 3.10.3";
    /// JLS 3.10.7: the null literal.
    pub const NULL_LITERAL: JlsSection = "JLS 3.10.7";
    /// JLS 3.11: separators.
    pub const SEPARATORS: JlsSection = "JLS 3.11";
    /// JLS 4.2: primitive types and values.
    pub const PRIMITIVE_TYPES: JlsSection = "JLS 4.2";
    /// JLS 4.5.1: type arguments and wildcards.
    pub const TYPE_ARGUMENTS: JlsSection = "JLS 4.5.1";
}
