// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Character-class state machine that turns command text into tokens.
//!
//! The tokenizer never fails: characters it does not recognise are folded
//! into word tokens, and all strictness is left to the parser.

use crate::token::{Token, TokenKind};

/// Classifier state, advanced one character at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    WordStartingWithLetter,
    WordStartingWithNumber,
    Number,
    /// Saw `|`, waiting to see whether it is `||`.
    PipePending,
    /// Saw `&`, waiting to see whether it is `&&`.
    AmpersandPending,
}

impl State {
    /// Kind of the token flushed when this state ends.
    fn token_kind(self) -> Option<TokenKind> {
        match self {
            State::Empty => None,
            State::WordStartingWithLetter => Some(TokenKind::WordStartingWithLetter),
            State::WordStartingWithNumber => Some(TokenKind::WordStartingWithNumber),
            State::Number => Some(TokenKind::Number),
            State::PipePending => Some(TokenKind::Pipe),
            State::AmpersandPending => Some(TokenKind::Ampersand),
        }
    }
}

/// Converts command text into an ordered token list ending in [`TokenKind::End`].
///
/// # Examples
///
/// ```ignore
/// use hh_parse::{Tokenizer, TokenKind};
///
/// let tokens = Tokenizer::new("ls -la | grep x").tokenize();
/// assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::End));
/// ```
pub struct Tokenizer<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    state: State,
    word: String,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `text`, trimmed of surrounding whitespace.
    pub fn new(text: &'a str) -> Self {
        Self {
            text: text.trim(),
            tokens: Vec::new(),
            state: State::Empty,
            word: String::new(),
        }
    }

    /// Run the state machine to completion.
    pub fn tokenize(mut self) -> Vec<Token> {
        for c in self.text.chars() {
            self.handle_char(c);
        }
        self.handle_end();
        tracing::trace!(count = self.tokens.len(), "tokenized input");
        self.tokens
    }

    fn handle_char(&mut self, c: char) {
        match self.state {
            State::Empty => self.handle_empty(c),
            State::WordStartingWithLetter | State::WordStartingWithNumber => self.handle_word(c),
            State::Number => self.handle_number(c),
            State::PipePending => self.handle_pending(c, '|', TokenKind::Or),
            State::AmpersandPending => self.handle_pending(c, '&', TokenKind::And),
        }
    }

    fn handle_empty(&mut self, c: char) {
        if c.is_ascii_alphabetic() {
            self.start(State::WordStartingWithLetter, c);
        } else if c.is_ascii_digit() {
            self.start(State::Number, c);
        } else if c == '|' {
            self.start(State::PipePending, c);
        } else if c == '&' {
            self.start(State::AmpersandPending, c);
        } else if let Some(kind) = TokenKind::punctuation(c) {
            self.add_token(kind, c.to_string());
        } else {
            // Unclassified characters start a word rather than failing.
            self.start(State::WordStartingWithLetter, c);
        }
    }

    fn handle_word(&mut self, c: char) {
        if TokenKind::punctuation(c).is_some() {
            self.end_word();
            self.handle_empty(c);
        } else {
            self.word.push(c);
        }
    }

    fn handle_number(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.word.push(c);
        } else if TokenKind::punctuation(c).is_some() {
            self.end_word();
            self.handle_empty(c);
        } else {
            self.state = State::WordStartingWithNumber;
            self.word.push(c);
        }
    }

    /// Second character after a pending `|` or `&`.
    fn handle_pending(&mut self, c: char, pending: char, doubled: TokenKind) {
        if c == pending {
            self.word.push(c);
            self.state = State::Empty;
            let text = std::mem::take(&mut self.word);
            self.add_token(doubled, text);
        } else {
            self.end_word();
            self.handle_empty(c);
        }
    }

    fn handle_end(&mut self) {
        if self.state != State::Empty {
            self.end_word();
        }
        self.add_token(TokenKind::End, String::new());
    }

    fn start(&mut self, state: State, c: char) {
        self.state = state;
        self.word.clear();
        self.word.push(c);
    }

    /// Flush the in-progress word as a token of the current state's kind.
    fn end_word(&mut self) {
        let state = std::mem::replace(&mut self.state, State::Empty);
        let text = std::mem::take(&mut self.word);
        if let Some(kind) = state.token_kind() {
            self.add_token(kind, text);
        }
    }

    fn add_token(&mut self, kind: TokenKind, text: String) {
        tracing::trace!(kind = %kind, text = %text.escape_debug(), "adding token");
        self.tokens.push(Token::new(kind, text));
    }
}

/// Tokenize `text`. Shorthand for `Tokenizer::new(text).tokenize()`.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new(text).tokenize()
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
