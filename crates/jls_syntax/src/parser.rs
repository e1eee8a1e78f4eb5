//! Recursive-descent parser for type names.
//!
//! Grammar:
//!
//! ```text
//! TypeName      := PrimitiveType ArraySuffix | QualifiedName TypeArguments? ArraySuffix
//! QualifiedName := Identifier ('.' Identifier)*
//! TypeArguments := '<' Argument (',' Argument)* '>'
//! Argument      := TypeName | '?' | '?' 'extends' TypeName | '?' 'super' TypeName
//! ArraySuffix   := ('[' ']')*
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use jls_syntax::{lexer, parser};
//!
//! let source = "java.util.Map<String, ? extends Number>[]";
//! let tokens = lexer::lex(source).unwrap();
//! let ty = parser::parse(source, &tokens).unwrap();
//! assert_eq!(ty.simple_name(), "Map[]");
//! assert_eq!(ty.binary_name(), "[Ljava.util.Map;");
//! ```

use crate::ast::*;
use crate::config::ParserConfig;
use crate::diagnostics::{ParseError, Span, errors};
use crate::identifier::Identifier;
use crate::lexer::{self, Token, TokenKind};
use jls_core::lang::keywords::KeywordId;
use jls_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/types.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
