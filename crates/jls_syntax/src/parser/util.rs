/// Miscellaneous parser utilities.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// Parse one identifier, rejecting keywords and literals.
    fn identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.peek();
        match &token.kind {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Identifier::from_lexeme(name.clone()))
            }
            TokenKind::Keyword(_) | TokenKind::Literal(_) => {
                let word = &self.source[token.span.start..token.span.end];
                Err(errors::reserved_word(word, token.span, self.source))
            }
            _ => Err(self.error_here("identifier")),
        }
    }
}
