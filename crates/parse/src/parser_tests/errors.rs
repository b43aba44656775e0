// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting and limits.

use super::helpers::{parse_kinds, t};
use crate::parse_error::{Construct, ParseError};
use crate::parser::{parse, Parser, ParserConfig, DEFAULT_MAX_DEPTH};
use crate::span::Span;
use crate::token::TokenKind::{self, *};

#[test]
fn missing_end() {
    let err = parse_kinds(&[WordStartingWithLetter]).unwrap_err();
    assert_eq!(err, ParseError::MissingEnd);
    assert_eq!(err.to_string(), "Expected end at the end of the token list");
    assert_eq!(err.span(), None);

    assert_eq!(Parser::new(Vec::new()).parse(), Err(ParseError::MissingEnd));
}

#[test]
fn missing_end_inside_string() {
    assert_eq!(parse_kinds(&[SingleQuote, WordStartingWithLetter]), Err(ParseError::MissingEnd));
}

#[test]
fn trailing_tokens_after_end() {
    let err = parse_kinds(&[WordStartingWithLetter, End, WordStartingWithLetter, End]).unwrap_err();
    assert_eq!(err, ParseError::TrailingTokens { span: Span::new(3, 6) });
    assert_eq!(err.to_string(), "unexpected tokens after end at position 3");
}

#[yare::parameterized(
    leading_pipe = { "| a", TokenKind::Pipe, 0 },
    leading_and  = { "&& a", TokenKind::And, 0 },
    missing_rhs  = { "a |", TokenKind::End, 3 },
    doubled_op   = { "a && || b", TokenKind::Or, 5 },
    or_then_semi = { "a || ; b", TokenKind::Semicolon, 5 },
)]
fn missing_operand(text: &str, found: TokenKind, at: usize) {
    match parse(text) {
        Err(ParseError::UnexpectedToken { found: f, expected, span }) => {
            assert_eq!(f, found);
            assert_eq!(expected, "command");
            assert_eq!(span.start, at);
        }
        other => panic!("expected UnexpectedToken for {text:?}, got {other:?}"),
    }
}

#[test]
fn nesting_too_deep() {
    let text = format!("echo {}", "$(".repeat(100));
    assert_eq!(
        parse(&text),
        Err(ParseError::NestingTooDeep { limit: DEFAULT_MAX_DEPTH })
    );
}

#[test]
fn max_depth_is_configurable() {
    let config = ParserConfig { max_depth: 3 };
    let err = Parser::with_config(t(&[WordStartingWithLetter, End]), config).parse().unwrap_err();
    assert_eq!(err, ParseError::NestingTooDeep { limit: 3 });
    assert_eq!(err.to_string(), "nesting exceeds the maximum depth of 3");

    let config = ParserConfig { max_depth: 4 };
    assert!(Parser::with_config(t(&[WordStartingWithLetter, End]), config).parse().is_ok());
}

#[test]
fn moderate_nesting_is_fine() {
    let text = format!("echo {}x{}", "$(".repeat(20), ")".repeat(20));
    let root = parse(&text).unwrap();
    assert_eq!(root.to_source(), text);
}

#[test]
fn error_context_snippet() {
    let input = "echo 'abc";
    let err = parse(input).unwrap_err();
    assert_eq!(
        err,
        ParseError::Unterminated {
            construct: Construct::SingleQuotedString,
            span: Span::new(5, 6),
        }
    );
    assert_eq!(err.context(input, 10).unwrap(), "echo 'abc\n     ^");
}

#[test]
fn error_diagnostic() {
    let input = "ls\necho \"abc";
    let err = parse(input).unwrap_err();
    assert_eq!(
        err.diagnostic(input).unwrap(),
        "error: unterminated double-quoted string: expected closing \" before end of input\n  --> line 2, column 6\n   |\n  2 | echo \"abc\n   |      ^"
    );
}

#[test]
fn no_context_without_span() {
    assert_eq!(ParseError::MissingEnd.context("abc", 5), None);
    assert_eq!(ParseError::NestingTooDeep { limit: 1 }.diagnostic("abc"), None);
}
