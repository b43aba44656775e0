// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipe, and, or: commands joined by `|`, `&&` and `||`.
//!
//! `|` binds tighter than `&&`/`||`, and chains fold to the left:
//!
//! ```text
//! a | b | c     =>  pipe(lhs: pipe(lhs: a, rhs: b), rhs: c)
//! a && b || c   =>  or(lhs: and(lhs: a, rhs: b), rhs: c)
//! a && b | c    =>  and(lhs: a, rhs: pipe(lhs: b, rhs: c))
//! ```

use super::{CommandHandler, Handler, Step};
use crate::leaf::{Leaf, LeafKind};
use crate::parse_error::ParseError;
use crate::parser::state::ParserState;
use crate::token::TokenKind;

/// Parses one item of a root: a command, optionally combined with further
/// commands by operators.
pub(crate) struct OperatorHandler {
    /// Completed `&&`/`||` left operand and the operator joining it.
    list: Option<(Leaf, LeafKind)>,
    /// Pipe chain in progress.
    pipeline: Option<Leaf>,
    /// The operator last seen, waiting for its right-hand command.
    pending: Option<LeafKind>,
    awaiting_operand: bool,
}

impl OperatorHandler {
    pub(crate) fn new() -> Self {
        Self {
            list: None,
            pipeline: None,
            pending: None,
            awaiting_operand: true,
        }
    }

    pub(crate) fn handle_token(&mut self, state: &mut ParserState) -> Result<Step, ParseError> {
        let kind = state.current_kind()?;

        if self.awaiting_operand {
            // An operator may be followed by a line break before its operand.
            return match kind {
                TokenKind::Space | TokenKind::Newline if self.pending.is_some() => {
                    state.consume_current_token()?;
                    Ok(Step::Continue)
                }
                TokenKind::Backslash if state.at_line_continuation() => {
                    state.skip_line_continuation()?;
                    Ok(Step::Continue)
                }
                _ => {
                    self.awaiting_operand = false;
                    Ok(Step::Spawn(Handler::Command(CommandHandler::new())))
                }
            };
        }

        match kind {
            TokenKind::Space => {
                state.consume_current_token()?;
                Ok(Step::Continue)
            }
            TokenKind::Pipe | TokenKind::And | TokenKind::Or => {
                let op = LeafKind::from_operator(kind);
                state.consume_current_token()?;
                tracing::trace!(operator = %kind, "operator");
                self.pending = op;
                self.awaiting_operand = true;
                Ok(Step::Continue)
            }
            _ => match self.build_leaves() {
                Some(leaf) => Ok(Step::Pop(leaf)),
                None => Err(state.unexpected("command")),
            },
        }
    }

    /// Fold a finished command into the expression.
    pub(crate) fn accept(&mut self, command: Leaf) {
        match self.pending.take() {
            Some(LeafKind::Pipe) => {
                self.pipeline = Some(match self.pipeline.take() {
                    Some(left) => Leaf::binary(LeafKind::Pipe, left, command),
                    None => command,
                });
            }
            Some(op) => {
                if let Some(pipeline) = self.pipeline.take() {
                    let left = match self.list.take() {
                        Some((list, list_op)) => Leaf::binary(list_op, list, pipeline),
                        None => pipeline,
                    };
                    self.list = Some((left, op));
                }
                self.pipeline = Some(command);
            }
            None => self.pipeline = Some(command),
        }
    }

    /// A single command is returned as-is; operators wrap it.
    fn build_leaves(&mut self) -> Option<Leaf> {
        let pipeline = self.pipeline.take()?;
        Some(match self.list.take() {
            Some((list, op)) => Leaf::binary(op, list, pipeline),
            None => pipeline,
        })
    }
}
