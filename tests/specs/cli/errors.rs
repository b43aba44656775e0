//! CLI error handling specs
//!
//! Verify diagnostics and exit codes for input that does not parse.

use crate::prelude::*;

#[test]
fn unterminated_quote_shows_diagnostic() {
    cli()
        .args(&["parse", "echo 'hello"])
        .fails()
        .code(1)
        .stderr_eq(
            "error: unterminated single-quoted string: expected closing ' before end of input
  --> line 1, column 6
   |
  1 | echo 'hello
   |      ^
",
        );
}

#[test]
fn unterminated_substitution_points_at_opening() {
    cli()
        .args(&["check", "ls\necho $(date"])
        .fails()
        .code(1)
        .stderr_has("unterminated command substitution")
        .stderr_has("--> line 2, column 6")
        .stderr_has("   |      ^^");
}

#[test]
fn stray_parenthesis_is_unexpected() {
    cli()
        .args(&["parse", "ls )"])
        .fails()
        .stderr_has("unexpected token right_parenthesis at position 3, expected command");
}

#[test]
fn missing_operand_fails() {
    cli()
        .args(&["parse", "ls &&"])
        .fails()
        .stderr_has("unexpected token end");
}

#[test]
fn max_depth_is_enforced() {
    cli()
        .args(&["--max-depth", "8", "parse", "echo $(echo $(echo x))"])
        .fails()
        .code(1)
        .stderr_eq("error: nesting exceeds the maximum depth of 8\n");
}

#[test]
fn invalid_output_format_is_a_usage_error() {
    cli()
        .args(&["-o", "yaml", "parse", "ls"])
        .fails()
        .code(2)
        .stderr_has("invalid value 'yaml'");
}
