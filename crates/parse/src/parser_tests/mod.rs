// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod helpers;

mod assignments;
mod commands;
mod continuation;
mod errors;
mod operators;
mod strings;
mod substitution;
