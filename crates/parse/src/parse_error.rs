// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::span::{self, Span};
use crate::token::TokenKind;
use std::fmt;
use thiserror::Error;

/// A construct that needs a closing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    SingleQuotedString,
    DoubleQuotedString,
    CommandSubstitution,
}

impl Construct {
    /// The token that closes this construct.
    pub fn closing(&self) -> &'static str {
        match self {
            Construct::SingleQuotedString => "'",
            Construct::DoubleQuotedString => "\"",
            Construct::CommandSubstitution => ")",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Construct::SingleQuotedString => "single-quoted string",
            Construct::DoubleQuotedString => "double-quoted string",
            Construct::CommandSubstitution => "command substitution",
        })
    }
}

/// Parser errors.
///
/// Parsing is all-or-nothing: any error aborts the whole parse and no
/// partial tree is returned.
///
/// # Examples
///
/// ```ignore
/// use hh_parse::{parse, ParseError};
///
/// let result = parse("echo 'hello");
/// assert!(matches!(result, Err(ParseError::Unterminated { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token list ran out before an `end` token was consumed.
    ///
    /// Signals a truncated token stream, e.g. a caller that built tokens by
    /// hand and forgot the sentinel.
    #[error("Expected end at the end of the token list")]
    MissingEnd,

    /// Tokens remain after the `end` token.
    #[error("unexpected tokens after end at position {}", span.start)]
    TrailingTokens { span: Span },

    /// End of input reached inside a quote or substitution.
    #[error("unterminated {construct}: expected closing {} before end of input", construct.closing())]
    Unterminated { construct: Construct, span: Span },

    /// A token that cannot start or continue the current production.
    #[error("unexpected token {found} at position {}, expected {expected}", span.start)]
    UnexpectedToken {
        found: TokenKind,
        expected: String,
        span: Span,
    },

    /// The handler stack would exceed the configured depth.
    #[error("nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    /// The source span of the error, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::MissingEnd | ParseError::NestingTooDeep { .. } => None,
            ParseError::TrailingTokens { span }
            | ParseError::Unterminated { span, .. }
            | ParseError::UnexpectedToken { span, .. } => Some(*span),
        }
    }

    /// A caret snippet of `input` around the error.
    ///
    /// `input` must be the text that was tokenized, trimmed.
    pub fn context(&self, input: &str, context_chars: usize) -> Option<String> {
        Some(span::snippet(input, self.span()?, context_chars))
    }

    /// A rich diagnostic with line/column info, or `None` if no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        Some(span::diagnostic(input, self.span()?, &self.to_string()))
    }
}
