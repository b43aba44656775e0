//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn hh_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn hh_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("tokens")
        .stdout_has("parse")
        .stdout_has("check");
}

#[test]
fn hh_parse_help_shows_global_flags() {
    cli()
        .args(&["parse", "--help"])
        .passes()
        .stdout_has("--output")
        .stdout_has("--max-depth");
}
