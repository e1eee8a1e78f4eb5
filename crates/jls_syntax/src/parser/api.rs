/// Parse a token stream into a [`TypeName`] with the default configuration.
///
/// ## Parameters
/// - `source`: The text the tokens were lexed from.
/// - `tokens`: Token stream produced by [`lexer::lex`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(source: &str, tokens: &[Token]) -> Result<TypeName, ParseError> {
    Parser::new(source, tokens, ParserConfig::default()).parse()
}

/// Lex and parse `text` as a type name.
///
/// ## Errors
/// Returns the first grammar violation as a [`ParseError`].
pub fn parse_type_name(text: &str) -> Result<TypeName, ParseError> {
    parse_type_name_with_config(text, &ParserConfig::default())
}

/// Lex and parse `text` as a type name, honoring `config`.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn parse_type_name_with_config(text: &str, config: &ParserConfig) -> Result<TypeName, ParseError> {
    let tokens = lexer::lex(text)?;
    Parser::new(text, &tokens, *config)
        .parse()
        .inspect_err(|e| tracing::debug!(error = %e, "rejected type name"))
}

impl TypeName {
    /// Parse `text` as a type name.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse_type_name(text)
    }

    /// Parse text the caller already knows to be a valid type name.
    ///
    /// ## Panics
    /// - If `text` is not a valid type name. Use [`TypeName::parse`] for untrusted text.
    pub fn from_known_legal(text: &str) -> Self {
        match parse_type_name(text) {
            Ok(ty) => ty,
            Err(e) => panic!("illegal type name '{text}': {e}"),
        }
    }
}

impl std::str::FromStr for TypeName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type_name(s)
    }
}

impl TryFrom<&str> for TypeName {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_type_name(value)
    }
}
