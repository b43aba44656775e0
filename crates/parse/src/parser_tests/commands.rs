// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simple commands, arguments and separators.

use super::helpers::{parse_kinds, shape, source, structure};
use crate::leaf::LeafKind;
use crate::token::TokenKind::*;
use serde_json::json;

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn one_argument() {
    // ls
    let root = parse_kinds(&[WordStartingWithLetter, End]).unwrap();
    assert_eq!(root.kind(), LeafKind::Root);
    assert_eq!(root.children().len(), 1);
    assert_eq!(root.children()[0].kind(), LeafKind::Command);
    assert_eq!(structure(&root), json!({ "root": { "command": "argument" } }));
    assert_eq!(root.to_source(), "abc");
}

#[test]
fn simple_multiple_arguments() {
    // git log
    let root = parse_kinds(&[WordStartingWithLetter, Space, WordStartingWithLetter, End]).unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": ["argument", "argument"] } })
    );
    assert_eq!(root.to_source(), "abc abc");
}

#[test]
fn command_at_a_path() {
    // /usr/bin/grep
    let root = parse_kinds(&[
        ForwardSlash,
        WordStartingWithLetter,
        ForwardSlash,
        WordStartingWithLetter,
        ForwardSlash,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": { "argument": [
            "argument_part", // /
            "argument_part", // abc
            "argument_part", // /
            "argument_part", // abc
            "argument_part", // /
            "argument_part", // abc
        ] } } })
    );
    assert_eq!(root.to_source(), "/abc/abc/abc");
}

#[test]
fn command_starting_with_number() {
    // 1hello
    let root = parse_kinds(&[WordStartingWithNumber, End]).unwrap();
    assert_eq!(structure(&root), json!({ "root": { "command": "argument" } }));
    assert_eq!(root.to_source(), "1bc");
}

#[test]
fn number_word_with_equals_is_not_an_assignment() {
    // 1hello=
    let root = parse_kinds(&[WordStartingWithNumber, Equals, End]).unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "command": { "argument": ["argument_part", "argument_part"] } } })
    );
    assert_eq!(root.to_source(), "1bc=");
}

#[test]
fn bare_dollar_is_literal() {
    // echo $HOME
    assert_eq!(
        shape("echo $HOME"),
        "{root: {command: [argument, {argument: [argument_part, argument_part]}]}}"
    );
    assert_eq!(source("echo $HOME"), "echo $HOME");
    assert_eq!(shape("echo $"), "{root: {command: [argument, argument]}}");
}

#[test]
fn runs_of_spaces_collapse() {
    assert_eq!(source("echo    hi"), "echo hi");
    assert_eq!(shape("echo    hi"), "{root: {command: [argument, argument]}}");
}

#[test]
fn ampersand_and_backtick_are_argument_text() {
    assert_eq!(shape("sleep 1 &"), "{root: {command: [argument, argument, argument]}}");
    assert_eq!(source("sleep 1 &"), "sleep 1 &");
    assert_eq!(
        shape("echo `date`"),
        "{root: {command: [argument, {argument: [argument_part, argument_part, argument_part]}]}}"
    );
}

#[test]
fn parenthesis_without_dollar_is_argument_text() {
    assert_eq!(
        shape("echo (a"),
        "{root: {command: [argument, {argument: [argument_part, argument_part]}]}}"
    );
}

// =============================================================================
// Separators
// =============================================================================

#[test]
fn multiple_commands_split_by_newline() {
    // echo hello\necho world
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        Newline,
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": [
            { "command": ["argument", "argument"] },
            { "command": ["argument", "argument"] }
        ] })
    );
    assert_eq!(root.to_source(), "abc abc; abc abc");
}

#[test]
fn multiple_commands_split_by_semicolon() {
    // echo hello; echo world
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        Semicolon,
        Space,
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": [
            { "command": ["argument", "argument"] },
            { "command": ["argument", "argument"] }
        ] })
    );
    assert_eq!(root.to_source(), "abc abc; abc abc");
}

#[yare::parameterized(
    doubled   = { "a;;b" },
    leading   = { "; a; b" },
    trailing  = { "a; b;" },
    blank_line = { "a\n\n\nb" },
    mixed     = { "a ;\n ; b" },
)]
fn empty_items_are_skipped(text: &str) {
    assert_eq!(shape(text), "{root: [{command: argument}, {command: argument}]}");
    assert_eq!(source(text), "a; b");
}

#[test]
fn empty_input_is_terminal_root() {
    let root = parse_kinds(&[End]).unwrap();
    assert!(root.is_terminal());
    assert_eq!(structure(&root), json!("root"));
    assert_eq!(root.to_source(), "");
    assert_eq!(shape("  ;\n; "), "root");
}

#[test]
fn separators_only_between_items() {
    let root = super::helpers::parsed("cd /tmp\nls -la; pwd");
    assert_eq!(root.children().len(), 3);
    assert_eq!(root.to_source(), "cd /tmp; ls -la; pwd");
}
