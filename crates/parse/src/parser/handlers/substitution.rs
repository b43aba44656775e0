// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command substitution: `$( ... )`.

use super::{Handler, RootHandler, Step};
use crate::leaf::{Leaf, LeafKind};
use crate::parse_error::{Construct, ParseError};
use crate::parser::state::ParserState;
use crate::span::Span;
use crate::token::TokenKind;

/// Consumes `$(`, parses a nested root, then requires the closing `)`.
pub(crate) struct SubstitutionHandler {
    opening: Option<Span>,
    body: Option<Leaf>,
}

impl SubstitutionHandler {
    pub(crate) fn new() -> Self {
        Self {
            opening: None,
            body: None,
        }
    }

    pub(crate) fn handle_token(&mut self, state: &mut ParserState) -> Result<Step, ParseError> {
        let Some(opening) = self.opening else {
            let dollar = state.current_span();
            state.consume_current_token()?;
            let paren = state.current_span();
            state.consume_current_token()?;
            self.opening = Some(dollar.merge(paren));
            return Ok(Step::Spawn(Handler::Root(RootHandler::nested())));
        };

        // The nested root always pops its leaf into `accept` before this
        // handler sees another token.
        let Some(body) = self.body.take() else {
            return Err(state.unexpected("command"));
        };

        if state.current_kind()? != TokenKind::RightParenthesis {
            return Err(ParseError::Unterminated {
                construct: Construct::CommandSubstitution,
                span: opening,
            });
        }
        state.consume_current_token()?;
        Ok(Step::Pop(Leaf::branch(LeafKind::CommandSubstitution, vec![body])))
    }

    pub(crate) fn accept(&mut self, body: Leaf) {
        self.body = Some(body);
    }
}
