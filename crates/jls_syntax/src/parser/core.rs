/// Parser core type and entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module.
/// - The parser stops at the first grammar violation; there is no error recovery because
///   a type name is either fully valid or rejected.
pub struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    config: ParserConfig,
    /// Number of currently open `<` lists.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `source`: The text `tokens` were lexed from, used for diagnostics.
    /// - `tokens`: Token stream produced by [`lexer::lex`]; it must end with `Eof`.
    pub fn new(source: &'a str, tokens: &'a [Token], config: ParserConfig) -> Self {
        debug_assert!(matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof));
        Self {
            source,
            tokens,
            pos: 0,
            config,
            depth: 0,
        }
    }

    /// Parse the whole token stream as exactly one type name.
    ///
    /// ## Errors
    /// - `Empty` if there are no tokens besides `Eof`.
    /// - `TrailingInput` if tokens remain after a complete type name.
    /// - Any error of the type-name grammar.
    pub fn parse(mut self) -> Result<TypeName, ParseError> {
        if self.is_at_end() {
            return Err(errors::empty("type name", self.source));
        }

        let ty = self.type_name()?;

        if !self.is_at_end() {
            let token = self.peek();
            return Err(errors::trailing_input(&token.kind.describe(), token.span, self.source));
        }
        Ok(ty)
    }
}
