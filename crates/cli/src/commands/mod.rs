// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod parse;
pub mod tokens;

use anyhow::{Context, Result};
use clap::Args;
use hh_parse::{Leaf, Parser, ParserConfig};
use std::io::Read;

use crate::exit_error::ExitError;
use crate::output::format_parse_error;

#[derive(Args)]
pub struct InputArgs {
    /// Command line to read. If omitted, reads from stdin
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

impl InputArgs {
    pub fn read(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read command line from stdin")?;
                Ok(buf)
            }
        }
    }
}

/// Parse `text`, reporting a failure as a diagnostic on stderr.
pub(crate) fn parse_reported(text: &str, config: &ParserConfig) -> Result<Leaf> {
    let tokens = hh_parse::tokenize(text);
    match Parser::with_config(tokens, config.clone()).parse() {
        Ok(root) => Ok(root),
        Err(e) => {
            tracing::debug!(error = ?e, "parse failed");
            eprintln!("{}", format_parse_error(&e, text.trim()));
            Err(ExitError::silent(1).into())
        }
    }
}
