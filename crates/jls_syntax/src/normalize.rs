//! Identifier normalization: turn free text into a legal identifier following a naming convention.
//!
//! Normalization happens in two passes:
//! - **Word extraction**: the input is cut into words at separators. Whitespace and `_` always separate; so does any
//!   character that could not appear at that position of the output (a non-start character before the first word,
//!   a non-part character afterwards).
//! - **Reassembly**: words are re-cased and joined according to the [`Convention`].
//!
//! If the assembled text collides with a reserved word it is escaped with a leading `_`.

use std::fmt;

use crate::diagnostics::{ParseError, errors};
use crate::identifier::{Identifier, is_identifier_part, is_identifier_start, is_reserved};

/// A naming style applied by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    /// `TestTestTest`
    CamelCase,
    /// `TEST_TEST_TEST`
    UpperCase,
    /// `test_test_test`
    LowerCase,
    /// `TEST_TEST_TEST`
    ConstantName,
    /// `testTestTest`
    MethodName,
    /// `testTestTest`
    VariableName,
}

impl Convention {
    pub const ALL: [Convention; 6] = [
        Convention::CamelCase,
        Convention::UpperCase,
        Convention::LowerCase,
        Convention::ConstantName,
        Convention::MethodName,
        Convention::VariableName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Convention::CamelCase => "camel case",
            Convention::UpperCase => "upper case",
            Convention::LowerCase => "lower case",
            Convention::ConstantName => "constant name",
            Convention::MethodName => "method name",
            Convention::VariableName => "variable name",
        }
    }

    /// Whether the first word starts lower-case.
    fn lower_first(self) -> bool {
        matches!(self, Convention::MethodName | Convention::VariableName)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize `text` into an identifier following `convention`.
///
/// ## Errors
/// - [`ErrorKind::Empty`](crate::ErrorKind::Empty) for `""`.
/// - [`ErrorKind::NoWords`](crate::ErrorKind::NoWords) when `text` holds no identifier characters at all (only
///   whitespace, `_` or illegal characters).
///
/// ## Examples
/// ```rust
/// use jls_syntax::normalize::{normalize, Convention};
///
/// assert_eq!(normalize("test test test", Convention::CamelCase).unwrap().as_str(), "TestTestTest");
/// assert_eq!(normalize("TEST_TEST_TEST", Convention::LowerCase).unwrap().as_str(), "test_test_test");
/// assert_eq!(normalize("for", Convention::VariableName).unwrap().as_str(), "_for");
/// ```
#[tracing::instrument(skip_all, fields(input_len = text.len(), convention = %convention))]
pub fn normalize(text: &str, convention: Convention) -> Result<Identifier, ParseError> {
    if text.is_empty() {
        return Err(errors::empty("text to normalize", text));
    }
    let words = split_words(text);
    if words.is_empty() {
        return Err(errors::no_words(text));
    }

    let mut assembled = match convention {
        Convention::CamelCase | Convention::MethodName | Convention::VariableName => {
            join_camel(&words, convention.lower_first())
        }
        Convention::UpperCase | Convention::ConstantName => join_snake(&words, true),
        Convention::LowerCase => join_snake(&words, false),
    };

    if assembled.is_empty() {
        return Err(errors::no_words(text));
    }
    if is_reserved(&assembled) {
        tracing::debug!(word = %assembled, "escaping reserved word");
        assembled.insert(0, '_');
    }

    Ok(Identifier::from_known_legal(assembled))
}

/// Cut `text` into separator-delimited words.
fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut started = false;

    for (i, c) in text.char_indices() {
        let legal_here = if started {
            is_identifier_part(c)
        } else {
            is_identifier_start(c)
        };
        if legal_here && c != '_' {
            started = true;
            if word_start.is_none() {
                word_start = Some(i);
            }
        } else if let Some(start) = word_start.take() {
            words.push(&text[start..i]);
        }
    }
    if let Some(start) = word_start {
        words.push(&text[start..]);
    }
    words
}

/// Split a word further at camel (`aB`) and acronym (`ABc` -> `A`, `Bc`) boundaries.
fn split_humps(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, cur) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);
        let camel = prev.is_lowercase() && cur.is_uppercase();
        let acronym = prev.is_uppercase() && cur.is_uppercase() && next.is_some_and(char::is_lowercase);
        if camel || acronym {
            parts.push(&word[start..offset]);
            start = offset;
        }
    }
    parts.push(&word[start..]);
    parts
}

fn join_snake(words: &[&str], upper: bool) -> String {
    let mut out = String::new();
    for part in words.iter().flat_map(|w| split_humps(w)) {
        let mark = out.len();
        if !out.is_empty() {
            out.push('_');
        }
        let before = out.len();
        if upper {
            push_legal(&mut out, part.chars().flat_map(char::to_uppercase));
        } else {
            push_legal(&mut out, part.chars().flat_map(char::to_lowercase));
        }
        if out.len() == before {
            out.truncate(mark);
        }
    }
    out
}

/// Re-case words into one camel-cased run.
///
/// An upper-case letter past the start survives only between two lower-case letters. A lone word keeps the humps
/// it already has; across several words each word opens a hump when that rule lets it, so the output normalizes
/// to itself.
fn join_camel(words: &[&str], lower_first: bool) -> String {
    let keep_humps = words.len() == 1;
    let mut out = String::new();

    for (index, word) in words.iter().enumerate() {
        let chars: Vec<char> = word.chars().collect();
        for (i, &c) in chars.iter().enumerate() {
            let after_lower = out.chars().next_back().is_some_and(char::is_lowercase);
            if i == 0 {
                // The rest of the word is lower-cased below, so only its mapped case matters here.
                let opens_hump = after_lower && chars.get(1).is_some_and(|n| n.to_lowercase().all(char::is_lowercase));
                if (index == 0 && !lower_first) || (index > 0 && opens_hump) {
                    push_legal(&mut out, c.to_uppercase());
                } else {
                    push_legal(&mut out, c.to_lowercase());
                }
                continue;
            }
            let before_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if keep_humps && c.is_uppercase() && after_lower && before_lower {
                out.push(c);
            } else {
                push_legal(&mut out, c.to_lowercase());
            }
        }
    }
    out
}

/// Append case-mapped characters, dropping any that are not legal at their position.
///
/// Some mappings produce combining marks (`ǰ` upper-cases to `J` followed by U+030C).
fn push_legal(out: &mut String, mapped: impl IntoIterator<Item = char>) {
    for c in mapped {
        let legal = if out.is_empty() {
            is_identifier_start(c)
        } else {
            is_identifier_part(c)
        };
        if legal {
            out.push(c);
        }
    }
}
