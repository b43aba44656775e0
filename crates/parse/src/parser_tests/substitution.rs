// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command substitution: `$( ... )`.

use super::helpers::{parsed, shape, source};
use crate::leaf::LeafKind;
use crate::parse_error::{Construct, ParseError};
use crate::parser::parse;
use crate::span::Span;
use crate::token::TokenKind;

#[test]
fn substitution_argument() {
    assert_eq!(
        shape("echo $(ls)"),
        "{root: {command: [argument, {argument: {command_substitution: {root: {command: argument}}}}]}}"
    );
    assert_eq!(source("echo $(ls)"), "echo $(ls)");
}

#[test]
fn substitution_body_is_a_full_root() {
    assert_eq!(
        shape("$(a | b; c)"),
        "{root: {command: {argument: {command_substitution: {root: [{pipe: [{lhs: {command: argument}}, {rhs: {command: argument}}]}, {command: argument}]}}}}}"
    );
    assert_eq!(source("$(cd /tmp && ls -la)"), "$(cd /tmp && ls -la)");
}

#[test]
fn nested_substitutions() {
    let root = parsed("echo $(echo $(date))");
    assert_eq!(root.to_source(), "echo $(echo $(date))");

    let outer = &root.children()[0].children()[1].children()[0];
    assert_eq!(outer.kind(), LeafKind::CommandSubstitution);
    let inner = &outer.children()[0].children()[0].children()[1].children()[0];
    assert_eq!(inner.kind(), LeafKind::CommandSubstitution);
}

#[test]
fn empty_substitution() {
    assert_eq!(
        shape("echo $()"),
        "{root: {command: [argument, {argument: {command_substitution: root}}]}}"
    );
    assert_eq!(source("echo $()"), "echo $()");
}

#[test]
fn whitespace_inside_substitution_is_normalised() {
    assert_eq!(source("$(  a   b )"), "$(a b)");
    assert_eq!(source("$(\na\n)"), "$(a)");
}

#[test]
fn substitution_inside_an_argument() {
    assert_eq!(
        shape("a$(b)c"),
        "{root: {command: {argument: [argument_part, {command_substitution: {root: {command: argument}}}, argument_part]}}}"
    );
    assert_eq!(source("a$(b)c"), "a$(b)c");
}

#[test]
fn substitution_next_to_a_string() {
    assert_eq!(
        shape("\"x\"$(y)"),
        "{root: {command: {argument: [{string: string_part}, {command_substitution: {root: {command: argument}}}]}}}"
    );
    assert_eq!(source("\"x\"$(y)"), "\"x\"$(y)");
}

#[test]
fn substitution_in_double_quotes_is_text() {
    assert_eq!(
        shape("echo \"$(x)\""),
        "{root: {command: [argument, {argument: {string: [string_part, string_part, string_part, string_part]}}]}}"
    );
}

#[test]
fn unterminated_substitution() {
    let err = parse("echo $(ls").unwrap_err();
    assert_eq!(
        err,
        ParseError::Unterminated {
            construct: Construct::CommandSubstitution,
            span: Span::new(5, 7),
        }
    );
    assert_eq!(
        err.to_string(),
        "unterminated command substitution: expected closing ) before end of input"
    );
}

#[test]
fn unterminated_nested_substitution_reports_innermost() {
    let err = parse("$(a $(b)").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Unterminated {
            construct: Construct::CommandSubstitution,
            span,
        } if span == Span::new(0, 2)
    ));

    let err = parse("$(a $(b").unwrap_err();
    assert_eq!(err.span(), Some(Span::new(4, 6)));
}

#[test]
fn stray_closing_parenthesis() {
    let err = parse("echo )").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            found: TokenKind::RightParenthesis,
            expected: "command".to_string(),
            span: Span::new(5, 6),
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected token right_parenthesis at position 5, expected command"
    );
    assert!(parse(")").is_err());
    assert!(parse("$(a))").is_err());
}
