//! `hh parse` and `hh check` specs

use crate::prelude::*;

#[test]
fn parse_prints_source_then_structure() {
    cli()
        .args(&["parse", "echo   hello |grep h"])
        .passes()
        .stdout_eq(
            "echo hello | grep h
{root: {pipe: [{lhs: {command: [argument, argument]}}, {rhs: {command: [argument, argument]}}]}}
",
        );
}

#[test]
fn parse_reads_stdin() {
    cli()
        .args(&["parse"])
        .stdin("a=1 b\nc\n")
        .passes()
        .stdout_eq(
            "a=1 b; c
{root: [{command: [{env_var: [lhs, rhs]}, argument]}, {command: argument}]}
",
        );
}

#[test]
fn parse_json() {
    let run = cli()
        .args(&["parse", "--output", "json", "echo \"$(date)\""])
        .passes();
    let value = run.stdout_json();
    assert_eq!(value["source"], "echo \"$(date)\"");
    assert_eq!(
        value["structure"],
        serde_json::json!({ "root": { "command": [
            "argument",
            { "argument": { "string": ["string_part", "string_part", "string_part", "string_part"] } }
        ] } })
    );
}

#[test]
fn parse_substitution() {
    cli()
        .args(&["parse", "echo $(ls -la)"])
        .passes()
        .stdout_eq(
            "echo $(ls -la)
{root: {command: [argument, {argument: {command_substitution: {root: {command: [argument, argument]}}}}]}}
",
        );
}

#[test]
fn parse_empty_input() {
    cli().args(&["parse", "   "]).passes().stdout_eq("\nroot\n");
}

#[test]
fn check_passes_on_valid_input() {
    cli()
        .args(&["check", "A=1 B='x y' cmd \\\n  --flag && other || fallback"])
        .passes()
        .stdout_eq("ok\n");
}

#[test]
fn check_json() {
    let run = cli().args(&["check", "-o", "json", "ls;pwd"]).passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!({ "ok": true, "source": "ls; pwd" })
    );
}
