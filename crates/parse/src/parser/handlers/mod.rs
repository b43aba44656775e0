// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One handler per grammar production.
//!
//! Handlers live on the parser's handler stack. Pushing a handler enters a
//! sub-grammar, popping returns from it, and the leaf carried by
//! [`Step::Pop`] is the return value handed to the handler beneath.

mod argument;
mod command;
mod operator;
mod root;
mod string;
mod substitution;

pub(crate) use argument::ArgumentHandler;
pub(crate) use command::CommandHandler;
pub(crate) use operator::OperatorHandler;
pub(crate) use root::RootHandler;
pub(crate) use string::StringHandler;
pub(crate) use substitution::SubstitutionHandler;

use super::state::ParserState;
use crate::leaf::Leaf;
use crate::parse_error::ParseError;

/// What the driver should do after a handler has looked at the cursor.
pub(crate) enum Step {
    /// Keep this handler on top; it consumed something.
    Continue,
    /// Push a child handler for a nested production.
    Spawn(Handler),
    /// The production is complete.
    Pop(Leaf),
}

pub(crate) enum Handler {
    Root(RootHandler),
    Operator(OperatorHandler),
    Command(CommandHandler),
    Argument(ArgumentHandler),
    String(StringHandler),
    Substitution(SubstitutionHandler),
}

impl Handler {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Handler::Root(_) => "root",
            Handler::Operator(_) => "operator",
            Handler::Command(_) => "command",
            Handler::Argument(_) => "argument",
            Handler::String(_) => "string",
            Handler::Substitution(_) => "command_substitution",
        }
    }

    /// Handle the token (or run of tokens) under the cursor.
    pub(crate) fn handle_token(&mut self, state: &mut ParserState) -> Result<Step, ParseError> {
        match self {
            Handler::Root(h) => h.handle_token(state),
            Handler::Operator(h) => h.handle_token(state),
            Handler::Command(h) => h.handle_token(state),
            Handler::Argument(h) => h.handle_token(state),
            Handler::String(h) => h.handle_token(state),
            Handler::Substitution(h) => h.handle_token(state),
        }
    }

    /// Receive the leaf of a finished child handler.
    pub(crate) fn accept(&mut self, leaf: Leaf) {
        match self {
            Handler::Root(h) => h.accept(leaf),
            Handler::Operator(h) => h.accept(leaf),
            Handler::Command(h) => h.accept(leaf),
            Handler::Argument(h) => h.accept(leaf),
            Handler::Substitution(h) => h.accept(leaf),
            // Strings spawn no children.
            Handler::String(_) => {}
        }
    }
}
