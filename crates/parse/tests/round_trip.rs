// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reconstruction properties over generated command lines.

use hh_parse::{parse, ParseError};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_./-]{0,5}"
}

fn argument() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => word(),
        1 => word().prop_map(|w| format!("'{w} x'")),
        1 => word().prop_map(|w| format!("\"{w}\"")),
        1 => (word(), word()).prop_map(|(a, b)| format!("{a}\"{b}\"")),
        1 => word().prop_map(|w| format!("$({w})")),
        1 => (word(), word()).prop_map(|(a, b)| format!("$({a} | {b})")),
        1 => (word(), word()).prop_map(|(a, b)| format!("{a}\\\n{b}")),
        1 => (word(), word()).prop_map(|(a, b)| format!("{a}|{b}")),
        1 => word().prop_map(|w| format!("&{w}")),
        1 => Just("&".to_string()),
        1 => Just("&\\\n&".to_string()),
    ]
}

fn assignment() -> impl Strategy<Value = String> {
    let equals = prop_oneof![4 => Just("="), 1 => Just("=\\\n")];
    ("[a-z][a-z0-9]{0,3}", equals, prop::option::of(argument())).prop_map(
        |(name, equals, value)| format!("{name}{equals}{}", value.unwrap_or_default()),
    )
}

fn command() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(assignment(), 0..2),
        prop::collection::vec(argument(), 1..4),
    )
        .prop_map(|(assignments, arguments)| {
            assignments
                .into_iter()
                .chain(arguments)
                .collect::<Vec<_>>()
                .join(" ")
        })
}

fn command_line() -> impl Strategy<Value = String> {
    let joiner = prop_oneof![
        Just(" | "),
        Just("|"),
        Just(" && "),
        Just(" || "),
        Just("; "),
        Just("\n"),
        Just(" \\\n "),
    ];
    (command(), prop::collection::vec((joiner, command()), 0..4)).prop_map(|(first, rest)| {
        let mut line = first;
        for (joiner, command) in rest {
            line.push_str(joiner);
            line.push_str(&command);
        }
        line
    })
}

proptest! {
    #[test]
    fn reconstruction_reparses_to_the_same_shape(line in command_line()) {
        let root = parse(&line).unwrap();
        let rebuilt = root.to_source();
        let reparsed = parse(&rebuilt).unwrap();
        prop_assert_eq!(root.structure(), reparsed.structure());
        // A reconstruction is already normalised.
        prop_assert_eq!(reparsed.to_source(), rebuilt);
    }

    #[test]
    fn parse_never_panics(input in "[ -~\n]{0,80}") {
        let _ = parse(&input);
    }

    #[test]
    fn unterminated_quote_is_an_error(
        line in command(),
        quote in prop_oneof![Just('\''), Just('"')],
    ) {
        let text = format!("{line} {quote}abc");
        let is_unterminated = matches!(parse(&text), Err(ParseError::Unterminated { .. }));
        prop_assert!(is_unterminated);
    }
}

#[test]
fn examples_round_trip() {
    for line in [
        "echo hello",
        "ls -la | grep foo && echo found || echo missing",
        "A=1 B='two words' env",
        "echo \"a \\\"quoted\\\" word\"",
        "echo $(date +%s) $(echo $(whoami))",
        "cd /tmp; ls",
        "echo ''",
        "echo a=b --color=auto",
        "x & y &z",
        "echo a|b",
    ] {
        let root = parse(line).unwrap();
        assert_eq!(root.to_source(), line, "round trip of {line:?}");
    }
}

#[test]
fn continuations_become_argument_boundaries() {
    for (line, expected) in [
        ("echo ab\\\ncd", "echo ab cd"),
        ("x &\\\n& y", "x & & y"),
        ("a=b\\\nc cmd", "a=b c cmd"),
        ("echo \"a\"\\\nb", "echo \"a\" b"),
    ] {
        let root = parse(line).unwrap();
        assert_eq!(root.to_source(), expected, "reconstruction of {line:?}");
        let reparsed = parse(expected).unwrap();
        assert_eq!(root.structure(), reparsed.structure(), "reparse of {line:?}");
    }
}

#[test]
fn parses_with_trace_logging_enabled() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("hh_parse=trace"))
        .with_test_writer()
        .try_init();

    let line = "a=1 echo \"x\" $(ls) | wc -l";
    assert_eq!(parse(line).unwrap().to_source(), line);
}
