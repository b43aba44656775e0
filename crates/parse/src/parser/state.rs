// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token cursor and handler stack shared by all grammar handlers.

use super::handlers::Handler;
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Tokens, a forward-only cursor, and the stack of active handlers.
pub(crate) struct ParserState {
    tokens: Vec<Token>,
    pos: usize,
    /// Byte offset of `tokens[pos]` in the concatenated token text.
    offset: usize,
    handler_stack: Vec<Handler>,
    max_depth: usize,
    deepest: usize,
}

impl ParserState {
    pub(crate) fn new(tokens: Vec<Token>, max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            offset: 0,
            handler_stack: Vec::new(),
            max_depth,
            deepest: 0,
        }
    }

    /// The token under the cursor.
    ///
    /// Running off the end of the list means no `end` token was consumed.
    pub(crate) fn current_token(&self) -> Result<&Token, ParseError> {
        self.tokens.get(self.pos).ok_or(ParseError::MissingEnd)
    }

    pub(crate) fn current_kind(&self) -> Result<TokenKind, ParseError> {
        self.current_token().map(Token::kind)
    }

    /// Look `n` tokens past the cursor without consuming (`0` is current).
    pub(crate) fn peek(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n)
    }

    pub(crate) fn peek_kind(&self, n: usize) -> Option<TokenKind> {
        self.peek(n).map(Token::kind)
    }

    /// Return the current token and advance past it.
    pub(crate) fn consume_current_token(&mut self) -> Result<Token, ParseError> {
        let token = self.current_token()?.clone();
        self.pos += 1;
        self.offset += token.text().len();
        Ok(token)
    }

    /// True at a `\` immediately followed by a newline.
    pub(crate) fn at_line_continuation(&self) -> bool {
        self.peek_kind(0) == Some(TokenKind::Backslash)
            && self.peek_kind(1) == Some(TokenKind::Newline)
    }

    /// Consume a `\`-newline pair. It contributes nothing to the tree.
    pub(crate) fn skip_line_continuation(&mut self) -> Result<(), ParseError> {
        self.consume_current_token()?;
        self.consume_current_token()?;
        Ok(())
    }

    /// Span of the current token (zero-width for `end`).
    pub(crate) fn current_span(&self) -> Span {
        let len = self.peek(0).map_or(0, |t| t.text().len());
        Span::new(self.offset, self.offset + len)
    }

    /// Error for a token the current production cannot use.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.current_token() {
            Ok(token) => ParseError::UnexpectedToken {
                found: token.kind(),
                expected: expected.to_string(),
                span: self.current_span(),
            },
            Err(e) => e,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }

    pub(crate) fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub(crate) fn push_handler(&mut self, handler: Handler) -> Result<(), ParseError> {
        if self.handler_stack.len() >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.handler_stack.push(handler);
        self.deepest = self.deepest.max(self.handler_stack.len());
        Ok(())
    }

    pub(crate) fn pop_handler(&mut self) -> Option<Handler> {
        self.handler_stack.pop()
    }

    /// The handler that will receive the next finished leaf.
    pub(crate) fn top_handler_mut(&mut self) -> Option<&mut Handler> {
        self.handler_stack.last_mut()
    }

    pub(crate) fn depth(&self) -> usize {
        self.handler_stack.len()
    }

    /// Deepest the handler stack has been during this parse.
    pub(crate) fn deepest(&self) -> usize {
        self.deepest
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
