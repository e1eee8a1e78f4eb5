//! Rendering parse errors for people.
//!
//! [`ParseError`] implements [`miette::Diagnostic`] and carries the text it was raised for, so a report shows the
//! offending region underlined together with any hint.

use jls_syntax::ParseError;
use miette::{GraphicalReportHandler, GraphicalTheme};

/// Render `error` as a multi-line report without colors.
///
/// ## Examples
/// ```rust
/// let err = jls::parse_type_name("java.util.List<int>").unwrap_err();
/// let report = jls::render_error(&err);
/// assert!(report.contains("cannot be used as a type argument"));
/// ```
pub fn render_error(error: &ParseError) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(100);
    let mut out = String::new();
    if handler.render_report(&mut out, error).is_err() {
        tracing::warn!(error = %error, "failed to render diagnostic report");
        return error.to_string();
    }
    out
}
