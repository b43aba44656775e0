// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoted strings.

use super::helpers::{parse_kinds, parsed, shape, source, structure};
use crate::leaf::{LeafKind, Quote};
use crate::parse_error::{Construct, ParseError};
use crate::parser::parse;
use crate::span::Span;
use crate::token::TokenKind::*;
use serde_json::json;

#[test]
fn quoted_arguments() {
    // hello "hello world" 'world hello'
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        DoubleQuote,
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        DoubleQuote,
        Space,
        SingleQuote,
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        SingleQuote,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": [
            "argument",
            { "argument": { "string": ["string_part", "string_part", "string_part"] } },
            { "argument": { "string": ["string_part", "string_part", "string_part"] } }
        ] } })
    );
    assert_eq!(root.to_source(), "abc \"abc abc\" 'abc abc'");
}

#[yare::parameterized(
    single = { SingleQuote, "'abc'" },
    double = { DoubleQuote, "\"abc\"" },
)]
fn command_of_a_string(quote: crate::token::TokenKind, expected: &str) {
    let root = parse_kinds(&[quote, WordStartingWithLetter, quote, End]).unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": { "argument": { "string": "string_part" } } } })
    );
    assert_eq!(root.to_source(), expected);
}

#[test]
fn unclosed_string() {
    // '
    let err = parse_kinds(&[SingleQuote, End]).unwrap_err();
    assert_eq!(
        err,
        ParseError::Unterminated {
            construct: Construct::SingleQuotedString,
            span: Span::new(0, 1),
        }
    );
}

#[test]
fn unclosed_string_after_argument() {
    // echo 'hello
    let err = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        SingleQuote,
        WordStartingWithLetter,
        End,
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        ParseError::Unterminated {
            construct: Construct::SingleQuotedString,
            ..
        }
    ));
}

#[test]
fn string_argument_with_escaped_quote() {
    // echo "\""
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        DoubleQuote,
        Backslash,
        DoubleQuote,
        DoubleQuote,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": [
            "argument",
            { "argument": { "string": ["string_part", "string_part"] } }
        ] } })
    );
    assert_eq!(root.to_source(), "abc \"\\\"\"");
}

#[test]
fn argument_with_a_newline() {
    // echo "hello\nworld"
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        DoubleQuote,
        WordStartingWithLetter,
        Newline,
        WordStartingWithLetter,
        DoubleQuote,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": [
            "argument",
            { "argument": { "string": ["string_part", "string_part", "string_part"] } }
        ] } })
    );
    assert_eq!(root.to_source(), "abc \"abc\nabc\"");
}

#[test]
fn backslash_before_escaped_quote_is_plain_content() {
    // The second backslash escapes the quote, so the string never closes.
    let err = parse(r#"echo "a\\" b"#).unwrap_err();
    assert!(matches!(
        err,
        ParseError::Unterminated {
            construct: Construct::DoubleQuotedString,
            ..
        }
    ));
    assert_eq!(source(r#"echo "a\\b""#), r#"echo "a\\b""#);

    let root = parsed(r#"echo "a\\" b""#);
    assert_eq!(root.children()[0].children().len(), 2);
    assert_eq!(root.to_source(), r#"echo "a\\" b""#);
}

#[test]
fn single_quotes_have_no_escapes() {
    // 'a\' closes at the second quote.
    assert_eq!(source(r"echo 'a\' b"), r"echo 'a\' b");
    assert_eq!(
        shape(r"echo 'a\' b"),
        "{root: {command: [argument, {argument: {string: [string_part, string_part]}}, argument]}}"
    );
}

#[test]
fn other_quote_is_plain_content() {
    assert_eq!(source(r#"echo "it's""#), r#"echo "it's""#);
    assert_eq!(source(r#"echo 'say "hi"'"#), r#"echo 'say "hi"'"#);
}

#[test]
fn separators_and_operators_inside_quotes_are_content() {
    let root = parsed("echo \"a; b | c && d\"");
    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].kind(), LeafKind::Command);
    assert_eq!(root.to_source(), "echo \"a; b | c && d\"");
}

#[test]
fn dollar_paren_inside_quotes_is_content() {
    assert_eq!(
        shape("echo '$(x)'"),
        "{root: {command: [argument, {argument: {string: [string_part, string_part, string_part, string_part]}}]}}"
    );
}

#[yare::parameterized(
    single = { "''", Quote::Single },
    double = { "\"\"", Quote::Double },
)]
fn empty_string_is_terminal(text: &str, quote: Quote) {
    let root = parsed(text);
    let argument = &root.children()[0].children()[0];
    let string = &argument.children()[0];
    assert_eq!(string.kind(), LeafKind::String(quote));
    assert!(string.is_terminal());
    assert_eq!(root.to_source(), text);
    assert_eq!(root.structure().to_string(), "{root: {command: {argument: string}}}");
}

#[test]
fn string_adjacent_to_text_joins_the_argument() {
    assert_eq!(
        shape("pre\"mid\"post"),
        "{root: {command: {argument: [argument_part, {string: string_part}, argument_part]}}}"
    );
    assert_eq!(source("pre\"mid\"post"), "pre\"mid\"post");
}

#[test]
fn unterminated_double_quote_points_at_opening() {
    let err = crate::parser::parse("echo \"abc").unwrap_err();
    assert_eq!(
        err,
        ParseError::Unterminated {
            construct: Construct::DoubleQuotedString,
            span: Span::new(5, 6),
        }
    );
    assert_eq!(
        err.to_string(),
        "unterminated double-quoted string: expected closing \" before end of input"
    );
}
