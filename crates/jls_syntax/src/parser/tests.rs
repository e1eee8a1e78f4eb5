#[cfg(test)]
/// Parser unit tests.
///
/// These tests cover the accepted grammar, the canonical rendering of parsed trees and the
/// exact diagnostics produced for rejected input.
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use jls_core::lang::primitives::PrimitiveId;

    fn parse_str(source: &str) -> Result<TypeName, ParseError> {
        parse_type_name(source)
    }

    fn kind_of(source: &str) -> ErrorKind {
        match parse_str(source) {
            Ok(ty) => panic!("expected '{source}' to be rejected, parsed {ty}"),
            Err(e) => e.kind,
        }
    }

    #[test]
    fn test_parse_primitive() {
        assert_eq!(parse_str("int").unwrap(), TypeName::Primitive(PrimitiveId::Int));
        assert_eq!(
            parse_str(" boolean [ ] [ ] ").unwrap(),
            TypeName::primitive(PrimitiveId::Boolean).with_dimensions(2)
        );
    }

    #[test]
    fn test_parse_qualified_reference() {
        let ty = parse_str("java.lang.String").unwrap();
        let reference = ty.as_reference().unwrap();
        let package: Vec<&str> = reference.package().iter().map(Identifier::as_str).collect();
        assert_eq!(package, vec!["java", "lang"]);
        assert_eq!(reference.simple_name().as_str(), "String");
        assert!(!reference.is_generic());
    }

    #[test]
    fn test_parse_wildcards() {
        let ty = parse_str("Map<?,? extends A,?super B>").unwrap();
        let args = ty.arguments();
        assert_eq!(args.len(), 3);
        assert_eq!(args[0], TypeArgument::Wildcard);
        assert!(matches!(&args[1], TypeArgument::Extends(t) if t.simple_name() == "A"));
        assert!(matches!(&args[2], TypeArgument::Super(t) if t.simple_name() == "B"));
        assert_eq!(ty.to_string(), "Map<?, ? extends A, ? super B>");
    }

    #[test]
    fn test_parse_generic_array() {
        let ty = parse_str("p.List<int[]>[][]").unwrap();
        assert_eq!(ty.dimensions(), 2);
        assert_eq!(ty.arguments().len(), 1);
        assert_eq!(ty.to_string(), "p.List<int[]>[][]");
        assert_eq!(ty.binary_name(), "[[Lp.List;");
    }

    #[test]
    fn test_nested_round_trip() {
        let ty = parse_str("p.T<p.T<?super p.T>>").unwrap();
        assert_eq!(ty.to_string(), "p.T<p.T<? super p.T>>");
        assert_eq!(parse_str(&ty.to_string()).unwrap(), ty);
    }

    #[test]
    fn test_rejected_kinds() {
        assert_eq!(kind_of(""), ErrorKind::Empty);
        assert_eq!(kind_of("  \t "), ErrorKind::Empty);
        assert_eq!(kind_of("@"), ErrorKind::InvalidCharacter);
        assert_eq!(kind_of("p.int"), ErrorKind::PrimitiveMisuse);
        assert_eq!(kind_of("int<T>"), ErrorKind::PrimitiveMisuse);
        assert_eq!(kind_of("int<?>"), ErrorKind::PrimitiveMisuse);
        assert_eq!(kind_of("T<int>"), ErrorKind::PrimitiveMisuse);
        assert_eq!(kind_of("T<? extends long>"), ErrorKind::PrimitiveMisuse);
        assert_eq!(kind_of("T<"), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of("T<?extends"), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of("boolean["), ErrorKind::UnexpectedEndOfInput);
        assert_eq!(kind_of("T<>"), ErrorKind::UnexpectedToken);
        assert_eq!(kind_of("T.."), ErrorKind::UnexpectedToken);
        assert_eq!(kind_of("T[["), ErrorKind::UnexpectedToken);
        assert_eq!(kind_of("T<T,,"), ErrorKind::UnexpectedToken);
        assert_eq!(kind_of("int int"), ErrorKind::TrailingInput);
        assert_eq!(kind_of("T T"), ErrorKind::TrailingInput);
        assert_eq!(kind_of("T?"), ErrorKind::TrailingInput);
        assert_eq!(kind_of("class"), ErrorKind::ReservedWord);
        assert_eq!(kind_of("void"), ErrorKind::ReservedWord);
        assert_eq!(kind_of("p.null"), ErrorKind::ReservedWord);
        assert_eq!(kind_of("T<? super true>"), ErrorKind::ReservedWord);
    }

    #[test]
    fn test_error_messages() {
        let message = |source: &str| parse_str(source).unwrap_err().to_string();
        insta::assert_snapshot!(message("T<"), @"unexpected end of input, expected type name (at offset 2)");
        insta::assert_snapshot!(message("p.int"), @"primitive type 'int' cannot be qualified by a package name (at offset 2)");
        insta::assert_snapshot!(message("int<T>"), @"primitive type 'int' cannot have type arguments (at offset 3)");
        insta::assert_snapshot!(message("List<int>"), @"primitive type 'int' cannot be used as a type argument (at offset 5)");
        insta::assert_snapshot!(message("a.b.class"), @"'class' is a reserved keyword and cannot be used as an identifier (at offset 4)");
        insta::assert_snapshot!(message("T<U>>"), @"unexpected trailing token '>' (at offset 4)");
        insta::assert_snapshot!(message("T<U?"), @"expected ',' or '>', found wildcard '?' (at offset 3)");
        insta::assert_snapshot!(message("T@"), @"invalid character '@' in type name (at offset 1)");
    }

    #[test]
    fn test_nesting_limit() {
        let config = ParserConfig::new().with_max_nesting_depth(2);
        assert!(parse_type_name_with_config("A<B<C>>", &config).is_ok());
        assert!(parse_type_name_with_config("A<B, C<D>, E<F>>", &config).is_ok());

        let err = parse_type_name_with_config("A<B<C<D>>>", &config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NestingTooDeep);
        assert_eq!(err.span, Span::new(5, 6));
        assert!(err.to_string().contains("limit of 2"), "{err}");

        let flat = ParserConfig::new().with_max_nesting_depth(0);
        assert!(parse_type_name_with_config("A[]", &flat).is_ok());
        assert_eq!(parse_type_name_with_config("A<B>", &flat).unwrap_err().kind, ErrorKind::NestingTooDeep);
    }

    #[test]
    fn test_unbounded_by_default() {
        let depth = 200;
        let source = format!("{}T{}", "T<".repeat(depth), ">".repeat(depth));
        let ty = parse_str(&source).unwrap();
        assert_eq!(ty.to_string(), source);
    }

    #[test]
    fn test_token_api() {
        let source = "T[]";
        let tokens = lexer::lex(source).unwrap();
        assert_eq!(parse(source, &tokens).unwrap().binary_name(), "[LT;");
    }

    #[test]
    fn test_from_str_and_known_legal() {
        let ty: TypeName = "p.T".parse().unwrap();
        assert_eq!(ty, TypeName::from_known_legal("p . T"));
        assert_eq!(TypeName::try_from("p.T[]").unwrap().dimensions(), 1);
    }

    #[test]
    #[should_panic(expected = "illegal type name 'int<T>'")]
    fn test_from_known_legal_panics() {
        let _ = TypeName::from_known_legal("int<T>");
    }
}
