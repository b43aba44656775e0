// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hh parse`: print the reconstruction and structure of a command line.

use anyhow::Result;
use hh_parse::ParserConfig;

use super::parse_reported;
use crate::output::{format_tree, OutputFormat};

pub fn handle(text: &str, config: &ParserConfig, format: OutputFormat) -> Result<()> {
    let root = parse_reported(text, config)?;
    println!("{}", format_tree(&root, format)?);
    Ok(())
}
