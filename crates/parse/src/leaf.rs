// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AST nodes ("leaves") and exact source reconstruction.
//!
//! A leaf is either terminal, wrapping exactly one token, or a branch
//! wrapping a non-empty ordered list of child leaves. Never both.
//!
//! ```text
//! root
//! └── command | pipe | and | or
//!     ├── lhs ── command ...
//!     └── rhs ── command ...
//!         ├── env_var
//!         │   ├── lhs
//!         │   └── rhs (value_part | string | command_substitution)*
//!         └── argument (argument_part | string | command_substitution)*
//! ```

use crate::structure::Structure;
use crate::token::{Token, TokenKind};
use std::fmt;

/// Quote character of a quoted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    /// The quote opened by a token of `kind`, if it is a quote token.
    pub fn from_kind(kind: TokenKind) -> Option<Quote> {
        match kind {
            TokenKind::SingleQuote => Some(Quote::Single),
            TokenKind::DoubleQuote => Some(Quote::Double),
            _ => None,
        }
    }

    pub fn token_kind(self) -> TokenKind {
        match self {
            Quote::Single => TokenKind::SingleQuote,
            Quote::Double => TokenKind::DoubleQuote,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Node kind.
///
/// `String` carries the quote character so the string can be rendered
/// back with its original delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Command,
    Argument,
    ArgumentPart,
    String(Quote),
    StringPart,
    EnvVar,
    Lhs,
    Rhs,
    CommandSubstitution,
    Pipe,
    And,
    Or,
    Root,
    ValuePart,
}

impl LeafKind {
    /// The symbol used by the structural projection.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeafKind::Command => "command",
            LeafKind::Argument => "argument",
            LeafKind::ArgumentPart => "argument_part",
            LeafKind::String(_) => "string",
            LeafKind::StringPart => "string_part",
            LeafKind::EnvVar => "env_var",
            LeafKind::Lhs => "lhs",
            LeafKind::Rhs => "rhs",
            LeafKind::CommandSubstitution => "command_substitution",
            LeafKind::Pipe => "pipe",
            LeafKind::And => "and",
            LeafKind::Or => "or",
            LeafKind::Root => "root",
            LeafKind::ValuePart => "value_part",
        }
    }

    /// Joiner rendered between the operands of a binary node.
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            LeafKind::Pipe => Some(" | "),
            LeafKind::And => Some(" && "),
            LeafKind::Or => Some(" || "),
            _ => None,
        }
    }

    /// The binary node kind for an operator token.
    pub fn from_operator(kind: TokenKind) -> Option<LeafKind> {
        match kind {
            TokenKind::Pipe => Some(LeafKind::Pipe),
            TokenKind::And => Some(LeafKind::And),
            TokenKind::Or => Some(LeafKind::Or),
            _ => None,
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    Token(Token),
    Children(Vec<Leaf>),
}

/// A node of the syntax tree.
///
/// Trees are owned top-down with no back-references. Reconstruct the source
/// with [`Leaf::to_source`] (or `Display`), and inspect the shape with
/// [`Leaf::structure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    kind: LeafKind,
    body: Body,
}

impl Leaf {
    /// A terminal leaf wrapping one token.
    pub fn terminal(kind: LeafKind, token: Token) -> Self {
        Self {
            kind,
            body: Body::Token(token),
        }
    }

    /// A branch leaf over ordered children, or `None` when there are none.
    pub fn try_branch(kind: LeafKind, children: Vec<Leaf>) -> Option<Self> {
        (!children.is_empty()).then(|| Self::branch(kind, children))
    }

    /// A branch leaf over ordered children. Callers guarantee at least one.
    pub(crate) fn branch(kind: LeafKind, children: Vec<Leaf>) -> Self {
        debug_assert!(!children.is_empty(), "{kind} leaf must have children");
        Self {
            kind,
            body: Body::Children(children),
        }
    }

    /// A binary operator node: `kind(lhs: left, rhs: right)`.
    pub fn binary(kind: LeafKind, left: Leaf, right: Leaf) -> Self {
        Self::branch(
            kind,
            vec![
                Self::branch(LeafKind::Lhs, vec![left]),
                Self::branch(LeafKind::Rhs, vec![right]),
            ],
        )
    }

    #[inline]
    pub fn kind(&self) -> LeafKind {
        self.kind
    }

    /// The wrapped token, for terminal leaves.
    pub fn token(&self) -> Option<&Token> {
        match &self.body {
            Body::Token(token) => Some(token),
            Body::Children(_) => None,
        }
    }

    /// Ordered children. Empty for terminal leaves.
    pub fn children(&self) -> &[Leaf] {
        match &self.body {
            Body::Token(_) => &[],
            Body::Children(children) => children,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.body, Body::Token(_))
    }

    /// Rebuild the source text this tree was parsed from.
    ///
    /// Separators are normalised to `"; "`, operators to a single space on
    /// each side, and runs of spaces between command parts to one space.
    pub fn to_source(&self) -> String {
        self.to_string()
    }

    /// The structural projection of this tree.
    pub fn structure(&self) -> Structure {
        let name = self.kind.as_str();
        match &self.body {
            Body::Token(_) => Structure::Kind(name),
            Body::Children(children) => match children.as_slice() {
                [only] => Structure::Single(name, Box::new(only.structure())),
                _ => Structure::List(name, children.iter().map(Leaf::structure).collect()),
            },
        }
    }

    /// Height of the tree; a terminal leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Leaf::depth).max().unwrap_or(0)
    }
}

fn join(f: &mut fmt::Formatter<'_>, leaves: &[Leaf], sep: &str) -> fmt::Result {
    for (i, leaf) in leaves.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{leaf}")?;
    }
    Ok(())
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children = match &self.body {
            Body::Token(token) => return f.write_str(token.text()),
            Body::Children(children) => children,
        };
        match self.kind {
            LeafKind::Command => join(f, children, " "),
            LeafKind::Root => join(f, children, "; "),
            LeafKind::String(quote) => {
                write!(f, "{}", quote.as_char())?;
                join(f, children, "")?;
                write!(f, "{}", quote.as_char())
            }
            LeafKind::EnvVar => match children.split_first() {
                Some((lhs, rhs)) => {
                    write!(f, "{lhs}=")?;
                    join(f, rhs, "")
                }
                None => Ok(()),
            },
            LeafKind::CommandSubstitution => {
                f.write_str("$(")?;
                join(f, children, "")?;
                f.write_str(")")
            }
            kind => join(f, children, kind.operator().unwrap_or("")),
        }
    }
}

#[cfg(test)]
#[path = "leaf_tests.rs"]
mod tests;
