// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::token::TokenKind::*;

fn kinds(text: &str) -> Vec<TokenKind> {
    tokenize(text).iter().map(Token::kind).collect()
}

fn texts(text: &str) -> Vec<String> {
    tokenize(text).iter().map(|t| t.text().to_string()).collect()
}

#[test]
fn empty_input_is_just_end() {
    assert_eq!(kinds(""), vec![End]);
    assert_eq!(kinds("   \n  "), vec![End]);
}

#[yare::parameterized(
    letter_word     = { "abc", vec![WordStartingWithLetter, End] },
    number          = { "123", vec![Number, End] },
    number_word     = { "1bc", vec![WordStartingWithNumber, End] },
    number_dash     = { "1-2", vec![WordStartingWithNumber, End] },
    two_words       = {
        "abc abc",
        vec![WordStartingWithLetter, Space, WordStartingWithLetter, End]
    },
    assignment      = { "a=b", vec![WordStartingWithLetter, Equals, WordStartingWithLetter, End] },
    path            = {
        "/usr/bin",
        vec![ForwardSlash, WordStartingWithLetter, ForwardSlash, WordStartingWithLetter, End]
    },
    substitution    = {
        "$(ls)",
        vec![Dollar, LeftParenthesis, WordStartingWithLetter, RightParenthesis, End]
    },
    quotes          = {
        "'a'\"b\"",
        vec![
            SingleQuote, WordStartingWithLetter, SingleQuote, DoubleQuote, WordStartingWithLetter,
            DoubleQuote, End,
        ]
    },
    separators      = {
        "a;b\nc",
        vec![
            WordStartingWithLetter, Semicolon, WordStartingWithLetter, Newline,
            WordStartingWithLetter, End,
        ]
    },
    backslash       = {
        "a\\ b",
        vec![WordStartingWithLetter, Backslash, Space, WordStartingWithLetter, End]
    },
    backtick        = { "`a`", vec![Backtick, WordStartingWithLetter, Backtick, End] },
    number_then_eq  = { "12=3", vec![Number, Equals, Number, End] },
    unclassified    = { "-la", vec![WordStartingWithLetter, End] },
)]
fn classifies(text: &str, expected: Vec<TokenKind>) {
    assert_eq!(kinds(text), expected);
}

#[yare::parameterized(
    pipe          = {
        "a | b",
        vec![WordStartingWithLetter, Space, Pipe, Space, WordStartingWithLetter, End]
    },
    or            = {
        "a || b",
        vec![WordStartingWithLetter, Space, Or, Space, WordStartingWithLetter, End]
    },
    and           = {
        "a && b",
        vec![WordStartingWithLetter, Space, And, Space, WordStartingWithLetter, End]
    },
    ampersand     = {
        "a & b",
        vec![WordStartingWithLetter, Space, Ampersand, Space, WordStartingWithLetter, End]
    },
    pipe_then_word = { "|x", vec![Pipe, WordStartingWithLetter, End] },
    amp_then_word = { "&x", vec![Ampersand, WordStartingWithLetter, End] },
    pipe_at_end   = { "a |", vec![WordStartingWithLetter, Space, Pipe, End] },
    amp_at_end    = { "a &", vec![WordStartingWithLetter, Space, Ampersand, End] },
    triple_pipe   = { "|||", vec![Or, Pipe, End] },
    pipe_quote    = { "|'", vec![Pipe, SingleQuote, End] },
)]
fn pending_operators(text: &str, expected: Vec<TokenKind>) {
    assert_eq!(kinds(text), expected);
}

#[test]
fn compound_operator_texts() {
    assert_eq!(texts("|| && | &"), vec!["||", " ", "&&", " ", "|", " ", "&", ""]);
}

#[test]
fn digit_word_is_one_token() {
    let tokens = tokenize("1bc2");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0], Token::new(WordStartingWithNumber, "1bc2"));
}

#[test]
fn operators_inside_words_accumulate() {
    // Only the single-character punctuation set ends a word.
    assert_eq!(texts("ls|grep"), vec!["ls|grep", ""]);
    assert_eq!(kinds("ls|grep"), vec![WordStartingWithLetter, End]);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(texts("  echo hi \n"), vec!["echo", " ", "hi", ""]);
}

#[test]
fn newline_inside_quotes_is_its_own_token() {
    assert_eq!(
        kinds("\"a\nb\""),
        vec![DoubleQuote, WordStartingWithLetter, Newline, WordStartingWithLetter, DoubleQuote, End]
    );
}

#[test]
fn non_ascii_is_folded_into_words() {
    assert_eq!(texts("héllo wörld"), vec!["héllo", " ", "wörld", ""]);
    assert_eq!(texts("ünï"), vec!["ünï", ""]);
}

#[test]
fn always_ends_with_exactly_one_end() {
    for input in ["", "a", "a |", "'", "$(", "a && b"] {
        let tokens = tokenize(input);
        let ends = tokens.iter().filter(|t| t.is(End)).count();
        assert_eq!(ends, 1, "input {input:?}");
        assert!(tokens.last().is_some_and(|t| t.is(End)));
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_partition_the_trimmed_input(input in "[ -~\n]{0,80}") {
            let tokens = tokenize(&input);
            let joined: String = tokens.iter().map(Token::text).collect();
            prop_assert_eq!(joined, input.trim());
        }

        #[test]
        fn tokenizer_never_panics(input in "\\PC{0,80}") {
            let tokens = tokenize(&input);
            prop_assert!(tokens.last().is_some_and(|t| t.is(End)));
        }

        #[test]
        fn no_token_is_empty_except_end(input in "[ -~\n]{0,80}") {
            for token in tokenize(&input) {
                prop_assert_eq!(token.text().is_empty(), token.is(End));
            }
        }
    }
}
