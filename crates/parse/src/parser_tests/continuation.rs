// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backslash-newline line continuations.

use super::helpers::{parse_kinds, parsed, shape, source, structure};
use crate::token::TokenKind::*;
use serde_json::json;

#[test]
fn continuation_between_arguments() {
    // abc \
    // abc
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        Backslash,
        Newline,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": ["argument", "argument"] } })
    );
    assert_eq!(root.to_source(), "abc abc");
}

#[test]
fn continuation_inside_an_argument_splits_it() {
    assert_eq!(shape("ab\\\ncd"), "{root: {command: [argument, argument]}}");
    assert_eq!(source("ab\\\ncd"), "ab cd");
    assert_eq!(source("echo ab\\\ncd"), "echo ab cd");
}

#[yare::parameterized(
    word           = { "echo ab\\\ncd" },
    after_string   = { "echo 'a'\\\nb" },
    in_value       = { "a=b\\\nc d" },
    ampersands     = { "x &\\\n& y" },
    before_equals  = { "echo a\\\n=b" },
)]
fn continuation_inside_a_word_round_trips(text: &str) {
    let first = parsed(text);
    let second = parsed(&first.to_source());
    assert_eq!(first.structure(), second.structure());
    assert_eq!(first.to_source(), second.to_source());
}

#[test]
fn continuation_between_ampersands_keeps_both() {
    assert_eq!(source("x &\\\n& y"), "x & & y");
    assert_eq!(shape("x &\\\n& y"), "{root: {command: [argument, argument, argument, argument]}}");
}

#[test]
fn continuation_inside_a_value_ends_it() {
    assert_eq!(source("a=b\\\nc d"), "a=b c d");
    assert_eq!(
        shape("a=b\\\nc d"),
        "{root: {command: [{env_var: [lhs, rhs]}, argument, argument]}}"
    );
}

#[test]
fn continuation_after_equals() {
    assert_eq!(source("a=\\\n1 cmd"), "a=1 cmd");
    assert_eq!(
        shape("a=\\\n1 cmd"),
        "{root: {command: [{env_var: [lhs, rhs]}, argument]}}"
    );
}

#[test]
fn continuation_around_operators() {
    assert_eq!(source("a \\\n&& b"), "a && b");
    assert_eq!(source("a && \\\nb"), "a && b");
    assert_eq!(source("a |\\\n b"), "a | b");
}

#[test]
fn leading_continuation_is_skipped() {
    assert_eq!(source("\\\na b"), "a b");
}

#[test]
fn backslash_without_newline_is_text() {
    assert_eq!(
        shape("a\\b"),
        "{root: {command: {argument: [argument_part, argument_part, argument_part]}}}"
    );
    assert_eq!(source("a\\b"), "a\\b");
    assert_eq!(source("a \\"), "a \\");
}

#[test]
fn continuation_in_quotes_is_content() {
    assert_eq!(source("\"a\\\nb\""), "\"a\\\nb\"");
    let parts = ["string_part"; 4];
    assert_eq!(
        structure(&parsed("'a\\\nb'")),
        json!({ "root": { "command": { "argument": { "string": parts } } } })
    );
}
