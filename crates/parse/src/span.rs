// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte ranges over tokenized text, used to point parse errors at source.
//!
//! Tokens carry no positions of their own. The parser sums the lengths of
//! the tokens it has consumed, which works because the token texts
//! concatenate back to the (trimmed) input.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A half-open byte range `start..end`.
///
/// # Examples
///
/// ```ignore
/// use hh_parse::Span;
///
/// let span = Span::new(5, 10);
/// assert_eq!(span.slice("echo hello"), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// A zero-width span at `pos`, used for the `end` sentinel.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// The spanned text, or `""` when out of bounds or not on a char boundary.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Line and column of a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    /// 1-indexed line number.
    pub line: usize,
    /// 0-indexed character column within the line.
    pub column: usize,
    /// Text of the line, without its newline.
    pub line_text: &'a str,
}

impl<'a> Location<'a> {
    /// Locate `offset` in `source`, clamping past-the-end offsets to the end.
    pub fn of(source: &'a str, offset: usize) -> Self {
        let mut at = offset.min(source.len());
        while !source.is_char_boundary(at) {
            at -= 1;
        }
        let before = &source[..at];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[at..].find('\n').map_or(source.len(), |i| at + i);

        Self {
            line: before.matches('\n').count() + 1,
            column: source[line_start..at].chars().count(),
            line_text: &source[line_start..line_end],
        }
    }
}

/// The line holding `span`, cut to `context_chars` characters on either
/// side, with carets under the span.
///
/// ```text
/// echo 'unterminated
///      ^
/// ```
pub fn snippet(input: &str, span: Span, context_chars: usize) -> String {
    let loc = Location::of(input, span.start);
    let first = loc.column.saturating_sub(context_chars);
    let shown: String = loc
        .line_text
        .chars()
        .skip(first)
        .take(loc.column - first + context_chars + 1)
        .collect();

    format!(
        "{}\n{}{}",
        shown,
        " ".repeat(loc.column - first),
        "^".repeat(span.len().max(1))
    )
}

/// Render a rustc-style diagnostic for `span`.
///
/// ```text
/// error: unterminated double-quoted string
///   --> line 2, column 6
///    |
///  2 | echo "abc
///    |      ^
/// ```
pub fn diagnostic(source: &str, span: Span, message: &str) -> String {
    let loc = Location::of(source, span.start);
    let mut out = format!("error: {message}\n");
    let _ = writeln!(out, "  --> line {}, column {}", loc.line, loc.column + 1);
    let _ = writeln!(out, "   |");
    let _ = writeln!(out, "{:>3} | {}", loc.line, loc.line_text);
    let _ = write!(
        out,
        "   | {}{}",
        " ".repeat(loc.column),
        "^".repeat(span.len().max(1))
    );
    out
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
