// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

/// Log filter directives from `HH_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var("HH_LOG").ok().filter(|s| !s.is_empty())
}
