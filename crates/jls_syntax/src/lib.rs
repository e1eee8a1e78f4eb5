//! Syntax layer for Java identifiers and type names: lexical classification, identifier normalization, the
//! type-name lexer and parser, the type-name tree and its renderers, and diagnostics.
//!
//! ## Notes
//! - This crate is syntax-only: it does not resolve names or check types.
//! - Vocabulary identity (keywords, literals, primitive types, punctuation) comes from `jls_core::lang` registries.
//! - Every operation is pure. Nothing is cached and no global state is mutated.
//!
//! ## Examples
//! ```rust
//! use jls_syntax::{Convention, Identifier, TypeName};
//!
//! let id = Identifier::normalize("max value", Convention::ConstantName).unwrap();
//! assert_eq!(id.as_str(), "MAX_VALUE");
//!
//! let ty = TypeName::parse("java.util.List<String>[]").unwrap();
//! assert_eq!(ty.class_name(), "[Ljava.util.List;");
//! ```
//!
//! ## See also
//! - `jls_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod identifier;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod render;
pub mod token_helpers;

pub use ast::{ArrayType, ElementType, ReferenceType, TypeArgument, TypeName};
pub use config::ParserConfig;
pub use diagnostics::{ErrorKind, ParseError, Span};
pub use identifier::Identifier;
pub use normalize::Convention;
pub use parser::{parse_type_name, parse_type_name_with_config};
