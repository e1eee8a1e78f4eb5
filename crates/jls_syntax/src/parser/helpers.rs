/// Token-stream helpers.
///
/// Peeking/consuming tokens and matching/expecting punctuation and keywords.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().is_punctuation(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.peek().kind.is_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, expected: &str) -> Result<&'a Token, ParseError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.error_here(expected))
        }
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Error for the current token when `expected` was required.
    fn error_here(&self, expected: &str) -> ParseError {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => errors::unexpected_end(expected, token.span.start, self.source),
            _ => errors::unexpected_token(&token.kind.describe(), expected, token.span, self.source),
        }
    }
}
