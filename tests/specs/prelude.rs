//! Test helpers for behavioral specifications.
//!
//! `cli().args(..).stdin(..)` builds an `hh` invocation; `passes()` or
//! `fails()` runs it and returns a [`RunAssert`] for chained checks.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

/// Locate the `hh` binary.
///
/// Prefers the llvm-cov target directory, then `target/debug` under the
/// workspace, then the directory two levels above the running test binary
/// (`target/debug/deps/specs-<hash>`).
fn hh_binary() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let beside_test_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent()?.parent().map(|dir| dir.join("hh")));

    let standard = manifest_dir.join("target/debug/hh");
    [
        Some(manifest_dir.join("target/llvm-cov-target/debug/hh")),
        Some(standard.clone()),
        beside_test_exe,
    ]
    .into_iter()
    .flatten()
    .find(|path| path.exists())
    .unwrap_or(standard)
}

/// Create a CLI builder for hh commands
pub fn cli() -> CliBuilder {
    CliBuilder::default()
}

#[derive(Default)]
pub struct CliBuilder {
    args: Vec<String>,
    stdin: Option<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Feed `input` on stdin. Without it the binary sees an empty stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn command(self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(hh_binary());
        cmd.args(&self.args)
            .env_remove("HH_LOG")
            .env_remove("RUST_LOG")
            .envs(self.envs)
            .write_stdin(self.stdin.unwrap_or_default());
        cmd
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        self.run(true)
    }

    /// Run and expect a non-zero exit code
    pub fn fails(self) -> RunAssert {
        self.run(false)
    }

    fn run(self, expect_success: bool) -> RunAssert {
        let run = RunAssert {
            output: self.command().output().expect("command should run"),
        };
        assert_eq!(
            run.output.status.success(),
            expect_success,
            "unexpected exit code {:?}\nstdout: {}\nstderr: {}",
            run.output.status.code(),
            run.stdout(),
            run.stderr()
        );
        run
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.output.status.code(), Some(expected));
        self
    }

    /// Exact stdout, with a diff on failure.
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Exact stderr, with a diff on failure.
    pub fn stderr_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stderr(), expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{expected}'\nstdout: {stdout}"
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{expected}'\nstderr: {stderr}"
        );
        self
    }
}
