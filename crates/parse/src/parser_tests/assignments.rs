// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable assignments.
//!
//! A letter-initial word directly followed by `=` is an assignment anywhere
//! in a command.
//!
//! - `a=1 cmd` => `command: [env_var, argument]`
//! - `cmd a=1` => `command: [argument, env_var]`
//! - `a=`      => `env_var` with only an `lhs` child

use super::helpers::{parse_kinds, parsed, shape, source, structure};
use crate::leaf::LeafKind;
use crate::token::TokenKind::*;
use serde_json::json;

#[test]
fn simple_environment_variable() {
    // a=hello
    let root = parse_kinds(&[WordStartingWithLetter, Equals, WordStartingWithLetter, End]).unwrap();
    assert_eq!(structure(&root), json!({ "root": { "command": { "env_var": ["lhs", "rhs"] } } }));
    assert_eq!(root.to_source(), "abc=abc");
}

#[test]
fn environment_variable_with_number_value() {
    // a=1hello
    let root = parse_kinds(&[WordStartingWithLetter, Equals, WordStartingWithNumber, End]).unwrap();
    assert_eq!(structure(&root), json!({ "root": { "command": { "env_var": ["lhs", "rhs"] } } }));
    assert_eq!(root.to_source(), "abc=1bc");
}

#[test]
fn multiple_environment_variables() {
    // a=hello b=world
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Equals,
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        Equals,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": [
            { "env_var": ["lhs", "rhs"] },
            { "env_var": ["lhs", "rhs"] }
        ] } })
    );
    assert_eq!(root.to_source(), "abc=abc abc=abc");
}

#[test]
fn empty_env_var_with_argument() {
    // a= hello
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Equals,
        Space,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": [{ "env_var": "lhs" }, "argument"] } })
    );
    assert_eq!(root.to_source(), "abc= abc");
}

#[yare::parameterized(
    at_end       = { "a=" },
    before_semi  = { "a=;" },
    before_pipe  = { "a=|b" },
)]
fn empty_value_has_no_rhs(text: &str) {
    let root = parsed(text);
    let command = &root.children()[0];
    let env_var = if command.kind() == LeafKind::Pipe {
        &command.children()[0].children()[0].children()[0]
    } else {
        &command.children()[0]
    };
    assert_eq!(env_var.kind(), LeafKind::EnvVar);
    assert_eq!(env_var.children().len(), 1);
    assert_eq!(env_var.children()[0].kind(), LeafKind::Lhs);
}

#[test]
fn env_var_with_double_quoted_value() {
    // a="hello"
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Equals,
        DoubleQuote,
        WordStartingWithLetter,
        DoubleQuote,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": { "env_var": [
            "lhs",
            { "rhs": { "string": "string_part" } }
        ] } } })
    );
    assert_eq!(root.to_source(), "abc=\"abc\"");
}

#[test]
fn env_var_with_single_quoted_value() {
    // a='hello'
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Equals,
        SingleQuote,
        WordStartingWithLetter,
        SingleQuote,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": { "env_var": [
            "lhs",
            { "rhs": { "string": "string_part" } }
        ] } } })
    );
    assert_eq!(root.to_source(), "abc='abc'");
}

#[test]
fn env_var_with_command_substitution() {
    // a=$(echo hello)
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Equals,
        Dollar,
        LeftParenthesis,
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        RightParenthesis,
        End,
    ])
    .unwrap();
    let inner = json!({ "root": { "command": ["argument", "argument"] } });
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": { "env_var": [
            "lhs",
            { "rhs": { "command_substitution": inner } }
        ] } } })
    );
    assert_eq!(root.to_source(), "abc=$(abc abc)");
}

#[test]
fn env_var_with_mixed_value() {
    // a=123"hello"456
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Equals,
        WordStartingWithNumber,
        DoubleQuote,
        WordStartingWithLetter,
        DoubleQuote,
        WordStartingWithNumber,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": { "env_var": ["lhs", { "rhs": [
            "value_part",
            { "string": "string_part" },
            "value_part"
        ] }] } } })
    );
    assert_eq!(root.to_source(), "abc=1bc\"abc\"1bc");
}

#[test]
fn dollar_word_that_looks_like_an_env_var() {
    // a=one $a=two (bash: "one=two: command not found")
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Equals,
        WordStartingWithLetter,
        Space,
        Dollar,
        WordStartingWithLetter,
        Equals,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": [
            { "env_var": ["lhs", "rhs"] },
            { "argument": ["argument_part", "argument_part", "argument_part", "argument_part"] }
        ] } })
    );
    assert_eq!(root.to_source(), "abc=abc $abc=abc");
}

#[test]
fn assignment_after_command_is_env_var() {
    let root = parsed("echo a=b");
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": ["argument", { "env_var": ["lhs", "rhs"] }] } })
    );
    assert_eq!(root.to_source(), "echo a=b");
    assert_eq!(
        shape("ls --color=auto"),
        "{root: {command: [argument, {env_var: [lhs, rhs]}]}}"
    );
    assert_eq!(shape("env a="), "{root: {command: [argument, {env_var: lhs}]}}");
}

#[yare::parameterized(
    number_start = { "echo 1bc=x" },
    dollar_start = { "echo $abc=x" },
    quoted_start = { "echo \"a\"b=x" },
    bare_equals  = { "echo =x" },
)]
fn equals_without_a_name_is_argument(text: &str) {
    let root = parsed(text);
    let command = &root.children()[0];
    assert_eq!(command.children().len(), 2);
    assert_eq!(command.children()[1].kind(), LeafKind::Argument);
}

#[test]
fn assignments_then_command() {
    assert_eq!(
        shape("A=1 B= cmd x"),
        "{root: {command: [{env_var: [lhs, rhs]}, {env_var: lhs}, argument, argument]}}"
    );
    assert_eq!(source("A=1 B= cmd x"), "A=1 B= cmd x");
}

#[test]
fn value_stops_at_space() {
    assert_eq!(source("a=b c"), "a=b c");
    assert_eq!(
        shape("a=b/c d"),
        "{root: {command: [{env_var: [lhs, {rhs: [value_part, value_part, value_part]}]}, argument]}}"
    );
}

#[test]
fn lhs_holds_the_name_token() {
    let root = parsed("PATH=/bin");
    let env_var = &root.children()[0].children()[0];
    let lhs = &env_var.children()[0];
    assert!(lhs.is_terminal());
    assert_eq!(lhs.token().map(|t| t.text()), Some("PATH"));
    assert_eq!(env_var.children()[1].kind(), LeafKind::Rhs);
    assert_eq!(env_var.to_source(), "PATH=/bin");
}
