// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipe, and, or.
//!
//! `|` binds tighter than `&&` and `||`; chains fold to the left.

use super::helpers::{parse_kinds, parsed, shape, source, structure};
use crate::leaf::LeafKind;
use crate::token::TokenKind::*;
use serde_json::json;

#[test]
fn or() {
    // abc || abc
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        Or,
        Space,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "or": [
            { "lhs": { "command": "argument" } },
            { "rhs": { "command": "argument" } }
        ] } })
    );
    assert_eq!(root.to_source(), "abc || abc");
}

#[test]
fn and() {
    // abc && abc
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        And,
        Space,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "and": [
            { "lhs": { "command": "argument" } },
            { "rhs": { "command": "argument" } }
        ] } })
    );
    assert_eq!(root.to_source(), "abc && abc");
}

#[test]
fn pipe() {
    // echo hello | grep hello
    let root = parse_kinds(&[
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        Space,
        Pipe,
        Space,
        WordStartingWithLetter,
        Space,
        WordStartingWithLetter,
        End,
    ])
    .unwrap();
    assert_eq!(
        structure(&root),
        json!({ "root": { "pipe": [
            { "lhs": { "command": ["argument", "argument"] } },
            { "rhs": { "command": ["argument", "argument"] } }
        ] } })
    );
    assert_eq!(root.to_source(), "abc abc | abc abc");
}

#[test]
fn pipe_without_spaces() {
    let root = parse_kinds(&[WordStartingWithLetter, Pipe, WordStartingWithLetter, End]).unwrap();
    assert_eq!(root.to_source(), "abc | abc");
}

#[test]
fn multiple_commands_some_with_pipes() {
    // echo hello\necho hello | grep hello\necho hello\necho hello | grep hello
    let pair = [WordStartingWithLetter, Space, WordStartingWithLetter];
    let mut kinds = Vec::new();
    kinds.extend(pair);
    kinds.push(Newline);
    kinds.extend(pair);
    kinds.extend([Space, Pipe, Space]);
    kinds.extend(pair);
    kinds.push(Newline);
    kinds.extend(pair);
    kinds.push(Newline);
    kinds.extend(pair);
    kinds.extend([Space, Pipe, Space]);
    kinds.extend(pair);
    kinds.push(End);

    let root = parse_kinds(&kinds).unwrap();
    let command = json!({ "command": ["argument", "argument"] });
    let piped = json!({ "pipe": [{ "lhs": command.clone() }, { "rhs": command.clone() }] });
    assert_eq!(
        structure(&root),
        json!({ "root": [command.clone(), piped.clone(), command, piped] })
    );
    assert_eq!(
        root.to_source(),
        "abc abc; abc abc | abc abc; abc abc; abc abc | abc abc"
    );
}

#[test]
fn pipes_fold_left() {
    assert_eq!(
        shape("a | b | c"),
        "{root: {pipe: [{lhs: {pipe: [{lhs: {command: argument}}, {rhs: {command: argument}}]}}, {rhs: {command: argument}}]}}"
    );
    assert_eq!(source("a |b  |  c"), "a | b | c");
}

#[test]
fn pipe_inside_a_word_is_text() {
    // Only punctuation ends a word, so `a|b` is a single argument.
    assert_eq!(shape("a|b"), "{root: {command: argument}}");
    assert_eq!(
        shape("a|b | c"),
        "{root: {pipe: [{lhs: {command: argument}}, {rhs: {command: argument}}]}}"
    );
}

#[test]
fn and_or_fold_left() {
    let root = parsed("a && b || c");
    let or = &root.children()[0];
    assert_eq!(or.kind(), LeafKind::Or);
    assert_eq!(or.children()[0].children()[0].kind(), LeafKind::And);
    assert_eq!(or.children()[1].children()[0].kind(), LeafKind::Command);
    assert_eq!(root.to_source(), "a && b || c");
}

#[test]
fn pipe_binds_tighter_than_and() {
    let root = parsed("a | b && c | d");
    let and = &root.children()[0];
    assert_eq!(and.kind(), LeafKind::And);
    assert_eq!(and.children()[0].children()[0].kind(), LeafKind::Pipe);
    assert_eq!(and.children()[1].children()[0].kind(), LeafKind::Pipe);
    assert_eq!(root.to_source(), "a | b && c | d");

    let root = parsed("a && b | c");
    let and = &root.children()[0];
    assert_eq!(and.kind(), LeafKind::And);
    assert_eq!(and.children()[0].children()[0].kind(), LeafKind::Command);
    assert_eq!(and.children()[1].children()[0].kind(), LeafKind::Pipe);
}

#[test]
fn operator_may_be_followed_by_newline() {
    assert_eq!(source("a &&\nb"), "a && b");
    assert_eq!(
        shape("a |\n\nb"),
        "{root: {pipe: [{lhs: {command: argument}}, {rhs: {command: argument}}]}}"
    );
}

#[test]
fn operators_then_separator() {
    assert_eq!(
        shape("a || b; c"),
        "{root: [{or: [{lhs: {command: argument}}, {rhs: {command: argument}}]}, {command: argument}]}"
    );
}

#[test]
fn assignment_then_pipe() {
    assert_eq!(source("a=1 cmd | wc"), "a=1 cmd | wc");
    assert_eq!(
        shape("a=1 cmd | wc"),
        "{root: {pipe: [{lhs: {command: [{env_var: [lhs, rhs]}, argument]}}, {rhs: {command: argument}}]}}"
    );
}
