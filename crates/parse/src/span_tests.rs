// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn slice_and_len() {
    let span = Span::new(5, 10);
    assert_eq!(span.slice("echo hello"), "hello");
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::empty(3).is_empty());
    assert_eq!(Span::new(2, 99).slice("short"), "");
}

#[test]
fn merge_covers_both() {
    assert_eq!(Span::new(4, 6).merge(Span::new(1, 3)), Span::new(1, 6));
}

#[test]
fn snippet_points_at_span() {
    assert_eq!(snippet("echo 'abc", Span::new(5, 6), 20), "echo 'abc\n     ^");
}

#[test]
fn snippet_handles_end_of_input() {
    assert_eq!(snippet("echo 'abc", Span::empty(9), 4), "'abc\n    ^");
}

#[test]
fn snippet_stays_on_the_error_line() {
    let input = "ls -la\necho $(date\npwd";
    assert_eq!(snippet(input, Span::new(12, 14), 3), "ho $(da\n   ^^");
}

#[yare::parameterized(
    first_line  = { "echo a\necho b", 0, 1, 0, "echo a" },
    second_line = { "echo a\necho b", 12, 2, 5, "echo b" },
    line_start  = { "echo a\necho b", 7, 2, 0, "echo b" },
    past_end    = { "ls", 9, 1, 2, "ls" },
    multibyte   = { "héllo wörld", 7, 1, 6, "héllo wörld" },
)]
fn locates(source: &str, offset: usize, line: usize, column: usize, line_text: &str) {
    assert_eq!(
        Location::of(source, offset),
        Location {
            line,
            column,
            line_text,
        }
    );
}

#[test]
fn diagnostic_has_line_and_caret() {
    assert_eq!(
        diagnostic("ls\necho \"abc", Span::new(8, 9), "unterminated"),
        "error: unterminated\n  --> line 2, column 6\n   |\n  2 | echo \"abc\n   |      ^"
    );
}
