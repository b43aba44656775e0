// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hh tokens`: print the token stream.

use anyhow::Result;
use hh_parse::tokenize;

use crate::output::{format_tokens, OutputFormat};

pub fn handle(text: &str, format: OutputFormat) -> Result<()> {
    let tokens = tokenize(text);
    println!("{}", format_tokens(&tokens, format)?);
    Ok(())
}
