// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simple commands: assignments followed by arguments.

use super::{ArgumentHandler, Handler, Step};
use crate::leaf::{Leaf, LeafKind};
use crate::parse_error::ParseError;
use crate::parser::state::ParserState;
use crate::token::{Token, TokenKind};

/// Parses one simple command into a `command` leaf.
///
/// A letter-initial word directly followed by `=` is an assignment
/// wherever it appears in the command:
///
/// - `a=1 b=2 cmd` => `[env_var, env_var, argument]`
/// - `cmd a=1`     => `[argument, env_var]`
pub(crate) struct CommandHandler {
    parts: Vec<Leaf>,
    /// Left-hand side of an assignment whose value is being parsed.
    lhs: Option<Token>,
}

impl CommandHandler {
    pub(crate) fn new() -> Self {
        Self {
            parts: Vec::new(),
            lhs: None,
        }
    }

    pub(crate) fn handle_token(&mut self, state: &mut ParserState) -> Result<Step, ParseError> {
        match state.current_kind()? {
            TokenKind::Space => {
                state.consume_current_token()?;
                Ok(Step::Continue)
            }
            TokenKind::Backslash if state.at_line_continuation() => {
                state.skip_line_continuation()?;
                Ok(Step::Continue)
            }
            kind if ends_command(kind) => {
                if self.parts.is_empty() {
                    return Err(state.unexpected("command"));
                }
                Ok(Step::Pop(self.build_leaves()))
            }
            TokenKind::WordStartingWithLetter if state.peek_kind(1) == Some(TokenKind::Equals) => {
                self.handle_assignment(state)
            }
            _ => Ok(Step::Spawn(Handler::Argument(ArgumentHandler::argument()))),
        }
    }

    /// `NAME=` has been seen; the value, if any, uses the argument grammar.
    fn handle_assignment(&mut self, state: &mut ParserState) -> Result<Step, ParseError> {
        let lhs = state.consume_current_token()?;
        state.consume_current_token()?;
        while state.at_line_continuation() {
            state.skip_line_continuation()?;
        }

        if ends_value(state.current_kind()?) {
            self.parts.push(env_var(lhs, None));
            return Ok(Step::Continue);
        }
        self.lhs = Some(lhs);
        Ok(Step::Spawn(Handler::Argument(ArgumentHandler::value())))
    }

    pub(crate) fn accept(&mut self, leaf: Leaf) {
        let part = match self.lhs.take() {
            Some(lhs) => env_var(lhs, Some(leaf)),
            None => leaf,
        };
        self.parts.push(part);
    }

    fn build_leaves(&mut self) -> Leaf {
        Leaf::branch(LeafKind::Command, std::mem::take(&mut self.parts))
    }
}

/// Tokens that end a command without being consumed by it.
fn ends_command(kind: TokenKind) -> bool {
    kind.is_operator()
        || kind.is_separator()
        || matches!(kind, TokenKind::End | TokenKind::RightParenthesis)
}

/// Tokens after `=` that mean the assignment has no value.
fn ends_value(kind: TokenKind) -> bool {
    kind == TokenKind::Space || ends_command(kind)
}

/// `env_var` leaf; without a value it has only the `lhs` child.
fn env_var(lhs: Token, rhs: Option<Leaf>) -> Leaf {
    let mut children = vec![Leaf::terminal(LeafKind::Lhs, lhs)];
    children.extend(rhs);
    Leaf::branch(LeafKind::EnvVar, children)
}
