#![forbid(unsafe_code)]
//! Java identifier normalization and type-name parsing.
//!
//! This crate is the public front door over two workspace crates:
//! - `jls_core`: the fixed vocabulary of the language (keywords, boolean and null literals, primitive types).
//! - `jls_syntax`: the lexical classifier, the identifier normalizer, and the type-name lexer, parser, tree and
//!   renderers.
//!
//! ## Panic Policy
//!
//! - Malformed input is an expected condition and is reported as a [`ParseError`].
//! - The `*_from_known_legal_text` constructors treat malformed input as a programming error and panic. Use them only
//!   for text that is legal by construction (literals in code, output of this crate).
//!
//! ## Examples
//! ```rust
//! use jls::{Convention, normalize_identifier, parse_type_name};
//!
//! let name = normalize_identifier("customer id", Convention::VariableName).unwrap();
//! assert_eq!(name.as_str(), "customerId");
//!
//! let ty = parse_type_name("java.util.Map<String, int[]>").unwrap();
//! assert_eq!(ty.qualified_name(), "java.util.Map");
//! assert_eq!(ty.to_string(), "java.util.Map<String, int[]>");
//! ```

pub mod report;

pub use jls_core::lang;
pub use jls_core::lang::{
    KeywordId, LiteralId, PrimitiveId, is_boolean_literal, is_keyword, is_null_literal, is_primitive_type_name,
};
pub use jls_syntax::identifier::{is_identifier_part, is_identifier_start, is_legal_identifier, is_legal_identifier_shape, is_reserved};
pub use jls_syntax::{
    ArrayType, Convention, ElementType, ErrorKind, Identifier, ParseError, ParserConfig, ReferenceType, Span,
    TypeArgument, TypeName, lexer, parser,
};

pub use report::render_error;

/// Normalize free text into a legal identifier following `convention`.
///
/// ## Errors
/// - `Empty` for `""`, `NoWords` when `text` has no identifier characters.
pub fn normalize_identifier(text: &str, convention: Convention) -> Result<Identifier, ParseError> {
    jls_syntax::normalize::normalize(text, convention)
}

/// Validate `text` as an identifier.
pub fn parse_identifier(text: &str) -> Result<Identifier, ParseError> {
    Identifier::parse(text)
}

/// Build an identifier from text known to be legal.
///
/// ## Panics
/// - If `text` is not a legal, non-reserved identifier.
pub fn identifier_from_known_legal_text(text: &str) -> Identifier {
    Identifier::from_known_legal(text)
}

/// Parse `text` as a type name.
pub fn parse_type_name(text: &str) -> Result<TypeName, ParseError> {
    jls_syntax::parse_type_name(text)
}

/// Parse `text` as a type name with a custom parser configuration.
pub fn parse_type_name_with_config(text: &str, config: &ParserConfig) -> Result<TypeName, ParseError> {
    jls_syntax::parse_type_name_with_config(text, config)
}

/// Build a type name from text known to be valid.
///
/// ## Panics
/// - If `text` is not a valid type name.
pub fn type_name_from_known_legal_text(text: &str) -> TypeName {
    TypeName::from_known_legal(text)
}

/// Call `f` with every keyword spelling.
pub fn for_each_keyword(f: impl FnMut(&'static str)) {
    lang::keywords::for_each_keyword(f)
}

/// Call `f` with every literal spelling (`true`, `false`, `null`).
pub fn for_each_literal(f: impl FnMut(&'static str)) {
    lang::literals::for_each_literal(f)
}

/// Call `f` with every primitive type name.
pub fn for_each_primitive_type(f: impl FnMut(&'static str)) {
    lang::primitives::for_each_primitive_type(f)
}
