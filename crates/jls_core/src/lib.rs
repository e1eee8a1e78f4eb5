//! Provide the canonical, read-only vocabulary of the Java language grammar.
//!
//! This crate is the "keyword table" the rest of the workspace consults: reserved keywords, boolean literals, the
//! null literal, primitive type names and the punctuation that structures type names.
//!
//! ## Notes
//!
//! - **No IO**, no dependencies and no mutable global state. Every table is a `const` slice, so lookups are safe from
//!   any number of threads without synchronization.
//! - Lookups are **case-sensitive**: `"for"` is reserved, `"For"` and `"FOR"` are not.
//!
//! ## Examples
//! ```rust
//! use jls_core::lang::{self, keywords, primitives};
//!
//! assert!(lang::is_reserved("class"));
//! assert!(lang::is_reserved("null"));
//! assert!(!lang::is_reserved("Class"));
//! assert_eq!(primitives::from_str("int").map(primitives::descriptor), Some('I'));
//! assert_eq!(keywords::from_str("goto"), Some(keywords::KeywordId::Goto));
//! ```

pub mod lang;
