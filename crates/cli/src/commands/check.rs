// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hh check`: verify that a command line parses and round-trips.
//!
//! The reconstruction of a tree must reparse to the same structure and
//! reconstruct to itself.

use anyhow::Result;
use hh_parse::{Leaf, ParserConfig};

use super::parse_reported;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

/// What a reparse of the reconstruction disagreed on.
#[derive(Debug, PartialEq)]
enum Mismatch {
    Structure { first: String, second: String },
    Source { first: String, second: String },
}

impl Mismatch {
    fn describe(&self) -> String {
        match self {
            Mismatch::Structure { first, second } => {
                format!("round trip changed the structure: {first} became {second}")
            }
            Mismatch::Source { first, second } => {
                format!("round trip changed the source: {first:?} became {second:?}")
            }
        }
    }
}

fn compare(first: &Leaf, second: &Leaf) -> Option<Mismatch> {
    if first.structure() != second.structure() {
        return Some(Mismatch::Structure {
            first: first.structure().to_string(),
            second: second.structure().to_string(),
        });
    }
    let (a, b) = (first.to_source(), second.to_source());
    if a != b {
        return Some(Mismatch::Source { first: a, second: b });
    }
    None
}

pub fn handle(text: &str, config: &ParserConfig, format: OutputFormat) -> Result<()> {
    let root = parse_reported(text, config)?;
    let source = root.to_source();
    let reparsed = parse_reported(&source, config)?;

    if let Some(mismatch) = compare(&root, &reparsed) {
        return Err(ExitError::new(1, mismatch.describe()).into());
    }

    match format {
        OutputFormat::Text => println!("ok"),
        OutputFormat::Json => {
            let obj = serde_json::json!({ "ok": true, "source": source });
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
    }
    Ok(())
}
