// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::error::ErrorKind;
use clap::FromArgMatches;

use super::{cli_command, format_error, Cli, Commands};
use crate::output::OutputFormat;
use hh_parse::DEFAULT_MAX_DEPTH;

fn parse_args(args: &[&str]) -> Cli {
    let matches = cli_command().try_get_matches_from(args).unwrap();
    Cli::from_arg_matches(&matches).unwrap()
}

#[test]
fn version_long() {
    let err = cli_command()
        .try_get_matches_from(["hh", "--version"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn defaults() {
    let cli = parse_args(&["hh", "parse", "ls"]);
    assert_eq!(cli.output, OutputFormat::Text);
    assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
    match cli.command {
        Some(Commands::Parse(args)) => assert_eq!(args.text.as_deref(), Some("ls")),
        _ => panic!("expected parse subcommand"),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse_args(&["hh", "tokens", "-o", "json", "--max-depth", "12"]);
    assert_eq!(cli.output, OutputFormat::Json);
    assert_eq!(cli.max_depth, 12);
    match cli.command {
        Some(Commands::Tokens(args)) => assert!(args.text.is_none()),
        _ => panic!("expected tokens subcommand"),
    }
}

#[test]
fn unknown_output_format_is_rejected() {
    let err = cli_command()
        .try_get_matches_from(["hh", "--output", "yaml", "check", "ls"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn no_subcommand_is_allowed() {
    assert!(parse_args(&["hh"]).command.is_none());
}

#[test]
fn format_error_skips_redundant_chain() {
    let err = anyhow::anyhow!("inner").context("outer: inner");
    assert_eq!(format_error(&err), "outer: inner");
}

#[test]
fn format_error_renders_distinct_causes() {
    let err = anyhow::anyhow!("disk full").context("failed to write");
    assert_eq!(
        format_error(&err),
        "failed to write\n\nCaused by:\n    0: disk full"
    );
}
