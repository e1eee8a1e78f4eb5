//! Integration tests for identifier validation and normalization through the public API.

use jls::{Convention, ErrorKind, Identifier, for_each_keyword, for_each_literal};

fn assert_invalid_identifier(text: &str) {
    let err = jls::parse_identifier(text).expect_err(text);
    assert!(!err.message.is_empty());
    let panicked = std::panic::catch_unwind(|| jls::identifier_from_known_legal_text(text));
    assert!(panicked.is_err(), "known-legal construction accepted '{text}'");
}

fn assert_invalid_normalization(text: &str, convention: Convention) {
    let err = jls::normalize_identifier(text, convention).expect_err(text);
    assert!(!err.message.is_empty());
}

fn normalized(text: &str, convention: Convention) -> Identifier {
    jls::normalize_identifier(text, convention).unwrap()
}

fn id(text: &str) -> Identifier {
    jls::identifier_from_known_legal_text(text)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[test]
fn parse_detects_invalid_identifiers() {
    assert_invalid_identifier("");
    assert_invalid_identifier("@");
    assert_invalid_identifier("   ");
    for_each_keyword(assert_invalid_identifier);
    for_each_literal(assert_invalid_identifier);
}

#[test]
fn parse_reports_rule_and_position() {
    assert_eq!(jls::parse_identifier("").unwrap_err().kind, ErrorKind::Empty);
    let err = jls::parse_identifier("abc def").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCharacter);
    assert_eq!(err.offset(), 3);
    assert_eq!(jls::parse_identifier("enum").unwrap_err().kind, ErrorKind::ReservedWord);
}

#[test]
fn legal_identifiers_round_trip() {
    for text in ["Java", "_", "$", "a1", "π", "__init__", "Integer", "NULL", "True"] {
        assert_eq!(jls::identifier_from_known_legal_text(text).to_string(), text);
        assert_eq!(jls::parse_identifier(text).unwrap().as_str(), text);
    }
}

#[test]
fn camel_case_normalization() {
    for input in [
        "test test test  ",
        "test_test_test",
        " test_test_test ",
        "  test test test  ",
        "  test  test  test  ",
        "  Test test test  ",
        "  Test  test  test  ",
        "Test  test  test  ",
        "tEST  tEST  tEST  ",
        "TestTestTest",
        "testTestTest",
        "test TeSt Test",
    ] {
        assert_eq!(normalized(input, Convention::CamelCase), id("TestTestTest"), "{input:?}");
    }
    assert_eq!(normalized("TEST", Convention::CamelCase), id("Test"));
    assert_eq!(normalized("tEsTtEsTtEsT", Convention::CamelCase), id("TesTtEsTtEst"));
    assert_eq!(
        normalized("tEsTtEsTtEsT tEsTtEsTtEsT", Convention::CamelCase),
        id("TesttesttestTesttesttest")
    );

    for_each_keyword(|keyword| {
        assert_eq!(normalized(&format!("   {keyword}   "), Convention::CamelCase), id(&capitalize(keyword)));
    });
    for_each_literal(|literal| {
        assert_eq!(normalized(&format!("   {literal}   "), Convention::CamelCase), id(&capitalize(literal)));
    });

    assert_invalid_normalization("", Convention::CamelCase);
    assert_invalid_normalization("@", Convention::CamelCase);
    assert_invalid_normalization("   ", Convention::CamelCase);
}

#[test]
fn upper_case_and_constant_name_normalization() {
    for convention in [Convention::UpperCase, Convention::ConstantName] {
        for input in [
            "test test test  ",
            "  test test test  ",
            "  test  test  test  ",
            "  Test test test  ",
            "  Test  test  test  ",
            "test_test_test  ",
            " test_test_test  ",
            "_test _test _test_",
            " _test _test _test_ ",
            "TEST_TEST_TEST",
        ] {
            assert_eq!(normalized(input, convention), id("TEST_TEST_TEST"), "{input:?}");
        }

        for_each_keyword(|keyword| {
            assert_eq!(normalized(&format!("   {keyword}   "), convention), id(&keyword.to_uppercase()));
        });
        for_each_literal(|literal| {
            assert_eq!(normalized(&format!("   {literal}   "), convention), id(&literal.to_uppercase()));
        });

        assert_invalid_normalization("", convention);
        assert_invalid_normalization("@", convention);
        assert_invalid_normalization("   ", convention);
    }
}

#[test]
fn lower_case_normalization() {
    for input in [
        "test test test  ",
        "  test test test  ",
        "  test  test  test  ",
        "  Test test test  ",
        "  Test  test  test  ",
        "TEST_TEST_TEST  ",
        " TEST_TEST_TEST  ",
        "_TEST _TEST _TEST_",
        " _TEST _TEST _TEST_ ",
        "test_test_test",
    ] {
        assert_eq!(normalized(input, Convention::LowerCase), id("test_test_test"), "{input:?}");
    }

    for_each_keyword(|keyword| {
        assert_eq!(normalized(&format!("   {keyword}   "), Convention::LowerCase), id(&format!("_{keyword}")));
    });
    for_each_literal(|literal| {
        assert_eq!(normalized(&format!("   {literal}   "), Convention::LowerCase), id(&format!("_{literal}")));
    });

    assert_invalid_normalization("", Convention::LowerCase);
    assert_invalid_normalization("@", Convention::LowerCase);
    assert_invalid_normalization("   ", Convention::LowerCase);
}

#[test]
fn method_and_variable_name_normalization() {
    for convention in [Convention::MethodName, Convention::VariableName] {
        for input in [
            "test test test  ",
            "test_test_test",
            " test_test_test ",
            "  test test test  ",
            "  test  test  test  ",
            "  Test test test  ",
            "  Test  test  test  ",
            "Test  test  test  ",
            "tEST  tEST  tEST  ",
            "TestTestTest",
            "testTestTest",
            "Test TeSt Test",
        ] {
            assert_eq!(normalized(input, convention), id("testTestTest"), "{input:?}");
        }
        assert_eq!(normalized("TEST", convention), id("test"));
        assert_eq!(normalized("TeStTeStTeStX", convention), id("teStTeStTeStx"));
        assert_eq!(normalized("TeStTeStTeSt TeStTeStTeSt", convention), id("testtesttestTesttesttest"));

        for_each_keyword(|keyword| {
            assert_eq!(normalized(&format!("   {keyword}   "), convention), id(&format!("_{keyword}")));
        });
        for_each_literal(|literal| {
            assert_eq!(normalized(&format!("   {literal}   "), convention), id(&format!("_{literal}")));
        });

        assert_invalid_normalization("", convention);
        assert_invalid_normalization("@", convention);
        assert_invalid_normalization("   ", convention);
    }
}

#[test]
fn normalization_scenarios() {
    assert_eq!(normalized("test test test", Convention::CamelCase).as_str(), "TestTestTest");
    assert_eq!(normalized("TEST_TEST_TEST", Convention::LowerCase).as_str(), "test_test_test");
    assert_eq!(normalized("for", Convention::VariableName).as_str(), "_for");
    assert_eq!(normalized("HTTPServer config", Convention::ConstantName).as_str(), "HTTP_SERVER_CONFIG");
    assert_eq!(normalized("9 lives", Convention::CamelCase).as_str(), "Lives");
    assert_eq!(normalized("order-id", Convention::MethodName).as_str(), "orderId");
}
