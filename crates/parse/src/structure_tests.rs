// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

fn nested() -> Structure {
    Structure::Single(
        "root",
        Box::new(Structure::List(
            "command",
            vec![
                Structure::Single("env_var", Box::new(Structure::Kind("lhs"))),
                Structure::Kind("argument"),
            ],
        )),
    )
}

#[test]
fn serializes_as_nested_mappings() {
    assert_eq!(
        serde_json::to_value(nested()).unwrap(),
        json!({ "root": { "command": [{ "env_var": "lhs" }, "argument"] } })
    );
}

#[test]
fn terminal_serializes_as_bare_symbol() {
    assert_eq!(
        serde_json::to_value(Structure::Kind("root")).unwrap(),
        json!("root")
    );
}

#[test]
fn displays_compactly() {
    assert_eq!(
        nested().to_string(),
        "{root: {command: [{env_var: lhs}, argument]}}"
    );
}
