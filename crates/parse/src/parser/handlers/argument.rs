// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arguments and assignment values.

use super::{Handler, Step, StringHandler, SubstitutionHandler};
use crate::leaf::{Leaf, LeafKind, Quote};
use crate::parse_error::ParseError;
use crate::parser::state::ParserState;
use crate::token::{Token, TokenKind};

/// A raw token or the leaf of a spawned string/substitution handler.
enum Part {
    Token(Token),
    Leaf(Leaf),
}

/// Parses one argument, or the value of an assignment.
///
/// Both use the same grammar; they differ only in the kinds of the leaves
/// they build (`argument`/`argument_part` vs `rhs`/`value_part`).
pub(crate) struct ArgumentHandler {
    kind: LeafKind,
    part_kind: LeafKind,
    parts: Vec<Part>,
}

impl ArgumentHandler {
    pub(crate) fn argument() -> Self {
        Self {
            kind: LeafKind::Argument,
            part_kind: LeafKind::ArgumentPart,
            parts: Vec::new(),
        }
    }

    pub(crate) fn value() -> Self {
        Self {
            kind: LeafKind::Rhs,
            part_kind: LeafKind::ValuePart,
            parts: Vec::new(),
        }
    }

    pub(crate) fn handle_token(&mut self, state: &mut ParserState) -> Result<Step, ParseError> {
        match state.current_kind()? {
            TokenKind::Space
            | TokenKind::End
            | TokenKind::Newline
            | TokenKind::RightParenthesis
            | TokenKind::Semicolon => Ok(Step::Pop(self.build_leaves())),
            TokenKind::SingleQuote => Ok(Step::Spawn(Handler::String(StringHandler::new(
                Quote::Single,
            )))),
            TokenKind::DoubleQuote => Ok(Step::Spawn(Handler::String(StringHandler::new(
                Quote::Double,
            )))),
            TokenKind::Dollar if state.peek_kind(1) == Some(TokenKind::LeftParenthesis) => Ok(
                Step::Spawn(Handler::Substitution(SubstitutionHandler::new())),
            ),
            // A bare `$` is literal text; expansion happens at run time.
            TokenKind::Dollar => {
                self.parts.push(Part::Token(state.consume_current_token()?));
                Ok(Step::Continue)
            }
            // A continuation separates arguments; the command skips it.
            TokenKind::Backslash if state.at_line_continuation() => {
                if self.parts.is_empty() {
                    state.skip_line_continuation()?;
                    return Ok(Step::Continue);
                }
                Ok(Step::Pop(self.build_leaves()))
            }
            _ => {
                let before = self.parts.len();
                while !is_boundary(state.current_kind()?) && !state.at_line_continuation() {
                    self.parts.push(Part::Token(state.consume_current_token()?));
                }
                tracing::trace!(count = self.parts.len() - before, "consumed tokens");
                Ok(Step::Continue)
            }
        }
    }

    pub(crate) fn accept(&mut self, leaf: Leaf) {
        self.parts.push(Part::Leaf(leaf));
    }

    /// A lone raw token collapses into a terminal leaf.
    fn build_leaves(&mut self) -> Leaf {
        let parts = std::mem::take(&mut self.parts);
        match <[Part; 1]>::try_from(parts) {
            Ok([Part::Token(token)]) => Leaf::terminal(self.kind, token),
            Ok([part]) => Leaf::branch(self.kind, vec![self.part_leaf(part)]),
            Err(parts) => Leaf::branch(
                self.kind,
                parts.into_iter().map(|p| self.part_leaf(p)).collect(),
            ),
        }
    }

    fn part_leaf(&self, part: Part) -> Leaf {
        match part {
            Part::Token(token) => Leaf::terminal(self.part_kind, token),
            Part::Leaf(leaf) => leaf,
        }
    }
}

/// Tokens that stop a run of plain argument text.
fn is_boundary(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Space
            | TokenKind::End
            | TokenKind::SingleQuote
            | TokenKind::DoubleQuote
            | TokenKind::Newline
            | TokenKind::RightParenthesis
            | TokenKind::Semicolon
            | TokenKind::Dollar
    )
}
