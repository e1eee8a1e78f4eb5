/// Type-name parsing methods.
///
/// This chunk parses the type-name grammar: primitive and reference types, type argument lists with
/// wildcards, and array suffixes.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_name(&mut self) -> Result<TypeName, ParseError> {
        let token = self.peek();
        let base = if let Some(primitive) = token.primitive_id() {
            self.advance();
            if self.check_punct(PunctuationId::LAngle) {
                return Err(errors::primitive_with_arguments(primitive, self.current_span(), self.source));
            }
            TypeName::Primitive(primitive)
        } else if matches!(token.kind, TokenKind::Ident(_)) || token.kind.is_reserved_word() {
            TypeName::Reference(self.reference_type()?)
        } else {
            return Err(self.error_here("type name"));
        };

        let dimensions = self.array_suffix()?;
        Ok(base.with_dimensions(dimensions))
    }

    fn reference_type(&mut self) -> Result<ReferenceType, ParseError> {
        let mut package = Vec::new();
        let mut simple_name = self.identifier()?;

        while self.match_punct(PunctuationId::Dot) {
            if let Some(primitive) = self.peek().primitive_id() {
                return Err(errors::qualified_primitive(primitive, self.current_span(), self.source));
            }
            let next = self.identifier()?;
            package.push(std::mem::replace(&mut simple_name, next));
        }

        let arguments = if self.check_punct(PunctuationId::LAngle) {
            self.type_arguments()?
        } else {
            Vec::new()
        };
        Ok(ReferenceType::from_parts(package, simple_name, arguments))
    }

    fn type_arguments(&mut self) -> Result<Vec<TypeArgument>, ParseError> {
        let open = self.expect_punct(PunctuationId::LAngle, "'<'")?;
        self.depth += 1;
        if !self.config.allows_depth(self.depth) {
            let max = self.config.max_nesting_depth.unwrap_or_default();
            return Err(errors::nesting_too_deep(max, open.span, self.source));
        }

        let mut arguments = vec![self.type_argument()?];
        while self.match_punct(PunctuationId::Comma) {
            arguments.push(self.type_argument()?);
        }
        self.expect_punct(PunctuationId::RAngle, "',' or '>'")?;

        self.depth -= 1;
        Ok(arguments)
    }

    fn type_argument(&mut self) -> Result<TypeArgument, ParseError> {
        if !self.match_punct(PunctuationId::Question) {
            return Ok(TypeArgument::Invariant(self.argument_type()?));
        }
        if self.match_keyword(KeywordId::Extends) {
            Ok(TypeArgument::Extends(self.argument_type()?))
        } else if self.match_keyword(KeywordId::Super) {
            Ok(TypeArgument::Super(self.argument_type()?))
        } else {
            Ok(TypeArgument::Wildcard)
        }
    }

    /// A type argument or wildcard bound: any type name except a bare primitive.
    fn argument_type(&mut self) -> Result<TypeName, ParseError> {
        let span = self.current_span();
        match self.type_name()? {
            TypeName::Primitive(primitive) => Err(errors::primitive_argument(primitive, span, self.source)),
            ty => Ok(ty),
        }
    }

    /// Parse `('[' ']')*` and return the number of dimensions.
    fn array_suffix(&mut self) -> Result<usize, ParseError> {
        let mut dimensions = 0;
        while self.match_punct(PunctuationId::LBracket) {
            self.expect_punct(PunctuationId::RBracket, "']'")?;
            dimensions += 1;
        }
        Ok(dimensions)
    }
}
