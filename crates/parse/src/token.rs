// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the tokenizer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a lexical unit.
///
/// Single-character punctuation has its own kind. Runs of letters and digits
/// are classified by how they start. `|` and `&` may pair up into the
/// compound `||` and `&&` operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// ` `
    Space,
    /// `=`
    Equals,
    /// `'`
    SingleQuote,
    /// `` ` ``
    Backtick,
    /// `"`
    DoubleQuote,
    /// `\n`
    Newline,
    /// `;`
    Semicolon,
    /// `\`
    Backslash,
    /// `$`
    Dollar,
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
    /// `/`
    ForwardSlash,
    /// A word whose first character is a letter (or unclassified).
    WordStartingWithLetter,
    /// A word that starts with a digit and later contains a non-digit.
    WordStartingWithNumber,
    /// A run of digits.
    Number,
    /// `|`
    Pipe,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `&`
    Ampersand,
    /// End-of-input sentinel with empty text.
    End,
}

impl TokenKind {
    /// Kind of a single-character punctuation token, if `c` is one.
    pub fn punctuation(c: char) -> Option<TokenKind> {
        let kind = match c {
            ' ' => TokenKind::Space,
            '=' => TokenKind::Equals,
            '\'' => TokenKind::SingleQuote,
            '`' => TokenKind::Backtick,
            '"' => TokenKind::DoubleQuote,
            '\n' => TokenKind::Newline,
            ';' => TokenKind::Semicolon,
            '\\' => TokenKind::Backslash,
            '$' => TokenKind::Dollar,
            '(' => TokenKind::LeftParenthesis,
            ')' => TokenKind::RightParenthesis,
            '/' => TokenKind::ForwardSlash,
            _ => return None,
        };
        Some(kind)
    }

    /// The snake_case symbol used in diagnostics and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Space => "space",
            TokenKind::Equals => "equals",
            TokenKind::SingleQuote => "single_quote",
            TokenKind::Backtick => "backtick",
            TokenKind::DoubleQuote => "double_quote",
            TokenKind::Newline => "newline",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Backslash => "backslash",
            TokenKind::Dollar => "dollar",
            TokenKind::LeftParenthesis => "left_parenthesis",
            TokenKind::RightParenthesis => "right_parenthesis",
            TokenKind::ForwardSlash => "forward_slash",
            TokenKind::WordStartingWithLetter => "word_starting_with_letter",
            TokenKind::WordStartingWithNumber => "word_starting_with_number",
            TokenKind::Number => "number",
            TokenKind::Pipe => "pipe",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Ampersand => "ampersand",
            TokenKind::End => "end",
        }
    }

    /// Returns true for `|`, `&&` and `||`.
    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::Pipe | TokenKind::And | TokenKind::Or)
    }

    /// Returns true for the two command separators, `;` and newline.
    #[inline]
    pub fn is_separator(&self) -> bool {
        matches!(self, TokenKind::Semicolon | TokenKind::Newline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable `(kind, text)` pair.
///
/// The text is the literal source text of the token, so concatenating the
/// text of every token reproduces the tokenized input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input sentinel.
    pub fn end() -> Self {
        Self::new(TokenKind::End, "")
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Token:{}:{}>", self.kind, self.text.replace('\n', ""))
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
