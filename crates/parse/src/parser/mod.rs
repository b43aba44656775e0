// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler-stack parser that turns tokens into a leaf tree.
//!
//! This is recursive descent with an explicit stack: each grammar
//! production is a handler, spawning a handler enters a nested production,
//! and popping returns its leaf to the handler beneath. Nesting depth is
//! bounded by [`ParserConfig::max_depth`] instead of the call stack.

mod handlers;
mod state;

use crate::leaf::Leaf;
use crate::parse_error::ParseError;
use crate::token::Token;
use crate::tokenizer::tokenize;
use handlers::{Handler, RootHandler, Step};
use state::ParserState;

/// Default bound on the handler stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser limits.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum number of handlers on the stack at once.
    ///
    /// Each `$( ... )` level costs about five handlers.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parses a token list into a `root` leaf.
///
/// The token list must end with the `end` sentinel, which the tokenizer
/// always appends. Parsing is all-or-nothing.
///
/// # Examples
///
/// ```ignore
/// use hh_parse::{tokenize, Parser};
///
/// let root = Parser::new(tokenize("echo hello | grep h")).parse()?;
/// assert_eq!(root.to_source(), "echo hello | grep h");
/// assert_eq!(
///     root.structure().to_string(),
///     "{root: {pipe: [{lhs: {command: [argument, argument]}}, {rhs: {command: [argument, argument]}}]}}"
/// );
/// # Ok::<(), hh_parse::ParseError>(())
/// ```
pub struct Parser {
    state: ParserState,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        Self {
            state: ParserState::new(tokens, config.max_depth),
        }
    }

    /// Drive the handler stack until the root handler pops.
    pub fn parse(mut self) -> Result<Leaf, ParseError> {
        self.state
            .push_handler(Handler::Root(RootHandler::top_level()))?;

        loop {
            let Some(mut handler) = self.state.pop_handler() else {
                return Err(ParseError::MissingEnd);
            };

            match handler.handle_token(&mut self.state)? {
                Step::Continue => self.state.push_handler(handler)?,
                Step::Spawn(child) => {
                    tracing::trace!(
                        parent = handler.name(),
                        handler = child.name(),
                        depth = self.state.depth() + 2,
                        "spawn"
                    );
                    self.state.push_handler(handler)?;
                    self.state.push_handler(child)?;
                }
                Step::Pop(leaf) => {
                    tracing::trace!(
                        handler = handler.name(),
                        depth = self.state.depth(),
                        "pop"
                    );
                    match self.state.top_handler_mut() {
                        Some(parent) => parent.accept(leaf),
                        None => return self.finish(leaf),
                    }
                }
            }
        }
    }

    /// The root has consumed `end`; nothing may follow it.
    fn finish(self, root: Leaf) -> Result<Leaf, ParseError> {
        if self.state.remaining() > 0 {
            return Err(ParseError::TrailingTokens {
                span: self.state.current_span(),
            });
        }
        tracing::debug!(
            tokens = self.state.token_count(),
            max_depth = self.state.deepest(),
            tree_depth = root.depth(),
            "parsed"
        );
        Ok(root)
    }
}

/// Parse an already-tokenized command line.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Leaf, ParseError> {
    Parser::new(tokens).parse()
}

/// Tokenize and parse command text.
///
/// Error spans refer to `text.trim()`.
pub fn parse(text: &str) -> Result<Leaf, ParseError> {
    parse_tokens(tokenize(text))
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
