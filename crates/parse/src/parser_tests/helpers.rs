// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for parser tests.

use crate::leaf::Leaf;
use crate::parse_error::ParseError;
use crate::parser::{parse, Parser};
use crate::token::{Token, TokenKind};

/// Build a token list from kinds, using fixed sample text for each kind.
pub(super) fn t(kinds: &[TokenKind]) -> Vec<Token> {
    kinds
        .iter()
        .map(|&kind| {
            let text = match kind {
                TokenKind::WordStartingWithLetter => "abc",
                TokenKind::Space => " ",
                TokenKind::Number => "123",
                TokenKind::WordStartingWithNumber => "1bc",
                TokenKind::Equals => "=",
                TokenKind::SingleQuote => "'",
                TokenKind::DoubleQuote => "\"",
                TokenKind::Backtick => "`",
                TokenKind::Pipe => "|",
                TokenKind::Dollar => "$",
                TokenKind::LeftParenthesis => "(",
                TokenKind::RightParenthesis => ")",
                TokenKind::Newline => "\n",
                TokenKind::Backslash => "\\",
                TokenKind::Or => "||",
                TokenKind::And => "&&",
                TokenKind::Ampersand => "&",
                TokenKind::Semicolon => ";",
                TokenKind::ForwardSlash => "/",
                TokenKind::End => "",
            };
            Token::new(kind, text)
        })
        .collect()
}

/// Parse hand-built tokens.
pub(super) fn parse_kinds(kinds: &[TokenKind]) -> Result<Leaf, ParseError> {
    Parser::new(t(kinds)).parse()
}

/// Projection of a leaf as JSON, for comparing against `json!` literals.
pub(super) fn structure(leaf: &Leaf) -> serde_json::Value {
    serde_json::to_value(leaf.structure()).unwrap()
}

/// Parse text, asserting success.
pub(super) fn parsed(text: &str) -> Leaf {
    match parse(text) {
        Ok(leaf) => leaf,
        Err(e) => panic!("failed to parse {text:?}: {e}"),
    }
}

/// Parse text and return its compact projection.
pub(super) fn shape(text: &str) -> String {
    parsed(text).structure().to_string()
}

/// Parse text and return its reconstruction.
pub(super) fn source(text: &str) -> String {
    parsed(text).to_source()
}
