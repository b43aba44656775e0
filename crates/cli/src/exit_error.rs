// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that carry their own process exit code.

use thiserror::Error;

/// Exit with `code`, printing `message` unless it is empty.
///
/// Commands that already reported the problem on stderr return an empty
/// message so `main` does not print it twice.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Failure already reported to the user.
    pub fn silent(code: i32) -> Self {
        Self::new(code, String::new())
    }
}
