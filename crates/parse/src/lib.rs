// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command-line tokenizer and parser for the hedgehog shell.
//!
//! Raw command text becomes a token stream, then a tree of typed leaves
//! that reconstructs its source exactly and exposes a structural
//! projection for inspection.
//!
//! # Quick Start
//!
//! ```ignore
//! use hh_parse::parse;
//!
//! let root = parse("a=1 echo \"hi there\" | grep hi")?;
//! assert_eq!(root.to_source(), "a=1 echo \"hi there\" | grep hi");
//! println!("{}", root.structure());
//! # Ok::<(), hh_parse::ParseError>(())
//! ```
//!
//! # Grammar
//!
//! - **Commands**: space-separated arguments, with `NAME=value` assignments
//!   allowed before the first argument
//! - **Quoting**: `'...'` and `"..."` with `\"` escapes in double quotes
//! - **Command substitution**: `$( ... )`, parsed as a nested root
//! - **Operators**: `|`, `&&`, `||`
//! - **Separators**: `;` and newline, plus `\`-newline line continuation
//!
//! A bare `$` is literal text: expansion and execution are left to the
//! consumers of the tree.
//!
//! # Tree Structure
//!
//! ```text
//! root
//! └── command | pipe | and | or       (one, or several separated by ";")
//!     ├── env_var [lhs, rhs?]
//!     └── argument
//!         ├── argument_part
//!         ├── string [string_part, ...]
//!         └── command_substitution ── root
//! ```

mod leaf;
mod parse_error;
mod parser;
pub mod span;
mod structure;
mod token;
mod tokenizer;

pub use leaf::{Leaf, LeafKind, Quote};
pub use parse_error::{Construct, ParseError};
pub use parser::{parse, parse_tokens, Parser, ParserConfig, DEFAULT_MAX_DEPTH};
pub use span::{Location, Span};
pub use structure::Structure;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
