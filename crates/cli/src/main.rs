// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hh - inspect how the hedgehog shell reads a command line

mod commands;
mod env;
mod exit_error;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{check, parse, tokens, InputArgs};
use hh_parse::{ParserConfig, DEFAULT_MAX_DEPTH};

#[derive(Parser)]
#[command(
    name = "hh",
    version,
    about = "Hedgehog - tokenize and parse shell command lines"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Maximum parser nesting depth
    #[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    max_depth: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a command line
    Tokens(InputArgs),
    /// Parse a command line and print its reconstruction and structure
    Parse(InputArgs),
    /// Check that a command line parses and round-trips
    Check(InputArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    setup_logging();

    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr so stdout stays machine-readable.
///
/// Filter comes from `HH_LOG`, then `RUST_LOG`, defaulting to warnings.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let config = ParserConfig {
        max_depth: cli.max_depth,
    };

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Tokens(args) => tokens::handle(&args.read()?, format),
        Commands::Parse(args) => parse::handle(&args.read()?, &config, format),
        Commands::Check(args) => check::handle(&args.read()?, &config, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
