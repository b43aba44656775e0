// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoted strings.

use super::Step;
use crate::leaf::{Leaf, LeafKind, Quote};
use crate::parse_error::{Construct, ParseError};
use crate::parser::state::ParserState;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parses a quoted string, starting at its opening quote.
///
/// Every token inside the quotes becomes a `string_part`, newlines
/// included. In double quotes, `\"` is an escape pair: both tokens are
/// kept as content and the quote does not close the string. Any other
/// backslash is plain content.
pub(crate) struct StringHandler {
    quote: Quote,
    opening: Option<Span>,
    parts: Vec<Token>,
}

impl StringHandler {
    pub(crate) fn new(quote: Quote) -> Self {
        Self {
            quote,
            opening: None,
            parts: Vec::new(),
        }
    }

    pub(crate) fn handle_token(&mut self, state: &mut ParserState) -> Result<Step, ParseError> {
        let Some(opening) = self.opening else {
            self.opening = Some(state.current_span());
            state.consume_current_token()?;
            return Ok(Step::Continue);
        };

        let kind = state.current_kind()?;
        if kind == TokenKind::End {
            return Err(ParseError::Unterminated {
                construct: self.construct(),
                span: opening,
            });
        }
        if kind == self.quote.token_kind() {
            state.consume_current_token()?;
            return Ok(Step::Pop(self.build_leaves()));
        }
        if self.at_escape(state) {
            self.parts.push(state.consume_current_token()?);
        }
        self.parts.push(state.consume_current_token()?);
        Ok(Step::Continue)
    }

    fn at_escape(&self, state: &ParserState) -> bool {
        self.quote == Quote::Double
            && state.peek_kind(0) == Some(TokenKind::Backslash)
            && state.peek_kind(1) == Some(TokenKind::DoubleQuote)
    }

    fn construct(&self) -> Construct {
        match self.quote {
            Quote::Single => Construct::SingleQuotedString,
            Quote::Double => Construct::DoubleQuotedString,
        }
    }

    /// `''` and `""` become a terminal leaf carrying both quote characters.
    fn build_leaves(&mut self) -> Leaf {
        let kind = LeafKind::String(self.quote);
        if self.parts.is_empty() {
            let quotes = self.quote.as_char().to_string().repeat(2);
            return Leaf::terminal(kind, Token::new(self.quote.token_kind(), quotes));
        }
        let parts = std::mem::take(&mut self.parts)
            .into_iter()
            .map(|token| Leaf::terminal(LeafKind::StringPart, token))
            .collect();
        Leaf::branch(kind, parts)
    }
}
