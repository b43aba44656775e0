// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use hh_parse::{Leaf, ParseError, Token};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One `<Token:kind:text>` per line, or a JSON array of `{kind, text}`.
pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(tokens
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
    }
}

/// The reconstruction, then the structural projection.
pub fn format_tree(root: &Leaf, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n{}", root.to_source(), root.structure())),
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "source": root.to_source(),
                "structure": root.structure(),
            });
            Ok(serde_json::to_string_pretty(&obj)?)
        }
    }
}

/// Human-readable report of a parse failure.
///
/// `input` must be the trimmed text that was parsed, since error spans
/// index into it.
pub fn format_parse_error(err: &ParseError, input: &str) -> String {
    err.diagnostic(input)
        .unwrap_or_else(|| format!("error: {}", err))
}
