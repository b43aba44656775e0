//! `hh tokens` specs

use crate::prelude::*;

#[test]
fn tokens_prints_one_token_per_line() {
    cli()
        .args(&["tokens", "a=1 ls|| x"])
        .passes()
        .stdout_eq(
            "<Token:word_starting_with_letter:a>
<Token:equals:=>
<Token:number:1>
<Token:space: >
<Token:word_starting_with_letter:ls||>
<Token:space: >
<Token:word_starting_with_letter:x>
<Token:end:>
",
        );
}

#[test]
fn tokens_reads_stdin_when_text_is_omitted() {
    cli()
        .args(&["tokens"])
        .stdin("  echo || x\n")
        .passes()
        .stdout_eq(
            "<Token:word_starting_with_letter:echo>
<Token:space: >
<Token:or:||>
<Token:space: >
<Token:word_starting_with_letter:x>
<Token:end:>
",
        );
}

#[test]
fn tokens_json() {
    let run = cli().args(&["-o", "json", "tokens", "1bc &"]).passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!([
            { "kind": "word_starting_with_number", "text": "1bc" },
            { "kind": "space", "text": " " },
            { "kind": "ampersand", "text": "&" },
            { "kind": "end", "text": "" }
        ])
    );
}
