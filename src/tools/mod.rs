//! External tool capability.
//!
//! Every formatter, linter, type-checker and git query goes through
//! [`Toolchain`], one synchronous call at a time. Tests substitute
//! `FakeToolchain`.

#[cfg(any(test, feature = "testing"))]
pub mod fake;
pub mod python;

#[cfg(any(test, feature = "testing"))]
pub use fake::FakeToolchain;

use std::path::Path;
use std::process::Command;

use crate::error::ToolError;

/// Exit status and stdout of a finished tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout_lines: Vec<String>,
}

impl ToolOutput {
    pub fn ok(lines: &[&str]) -> Self {
        Self {
            status: Some(0),
            stdout_lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn failed(code: i32, lines: &[&str]) -> Self {
        Self {
            status: Some(code),
            stdout_lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Diagnostic lines of a failed run: trimmed, non-blank, without the
    /// trailing `Found N errors` summary. A clean or silent run has none.
    pub fn diagnostics(&self) -> Vec<String> {
        if self.success() {
            return Vec::new();
        }
        self.stdout_lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with("Found"))
            .map(String::from)
            .collect()
    }
}

pub trait Toolchain {
    /// Whether `program` resolves on `PATH`.
    fn which(&self, program: &str) -> bool;

    /// Run `program` to completion and capture its stdout.
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>)
    -> Result<ToolOutput, ToolError>;
}

/// Runs real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<ToolOutput, ToolError> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        log::debug!("run: {program} {}", args.join(" "));
        let output = cmd.output().map_err(|source| ToolError::Spawn {
            program: program.to_string(),
            source,
        })?;
        Ok(ToolOutput {
            status: output.status.code(),
            stdout_lines: String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(String::from)
                .collect(),
        })
    }
}
