// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Root production: items separated by `;` or newline.

use super::{Handler, OperatorHandler, Step};
use crate::leaf::{Leaf, LeafKind};
use crate::parse_error::ParseError;
use crate::parser::state::ParserState;
use crate::token::{Token, TokenKind};

/// Collects items (commands or operator expressions) into a `root` leaf.
///
/// The top-level root consumes the `end` token. A nested root (the body of
/// a command substitution) stops, without consuming, at `)` or `end` and
/// leaves the closing check to its substitution.
pub(crate) struct RootHandler {
    nested: bool,
    items: Vec<Leaf>,
    end: Option<Token>,
}

impl RootHandler {
    pub(crate) fn top_level() -> Self {
        Self {
            nested: false,
            items: Vec::new(),
            end: None,
        }
    }

    pub(crate) fn nested() -> Self {
        Self {
            nested: true,
            ..Self::top_level()
        }
    }

    pub(crate) fn handle_token(&mut self, state: &mut ParserState) -> Result<Step, ParseError> {
        match state.current_kind()? {
            TokenKind::Space | TokenKind::Semicolon | TokenKind::Newline => {
                state.consume_current_token()?;
                Ok(Step::Continue)
            }
            TokenKind::Backslash if state.at_line_continuation() => {
                state.skip_line_continuation()?;
                Ok(Step::Continue)
            }
            TokenKind::End | TokenKind::RightParenthesis if self.nested => {
                Ok(Step::Pop(self.build_leaves()))
            }
            TokenKind::End => {
                self.end = Some(state.consume_current_token()?);
                Ok(Step::Pop(self.build_leaves()))
            }
            TokenKind::RightParenthesis => Err(state.unexpected("command")),
            _ => Ok(Step::Spawn(Handler::Operator(OperatorHandler::new()))),
        }
    }

    pub(crate) fn accept(&mut self, leaf: Leaf) {
        self.items.push(leaf);
    }

    /// An empty root is a terminal leaf over its `end` token.
    fn build_leaves(&mut self) -> Leaf {
        if self.items.is_empty() {
            let end = self.end.take().unwrap_or_else(Token::end);
            return Leaf::terminal(LeafKind::Root, end);
        }
        Leaf::branch(LeafKind::Root, std::mem::take(&mut self.items))
    }
}
