//! Scripted toolchain for tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::{ToolOutput, Toolchain};
use crate::error::ToolError;

/// A [`Toolchain`] that answers from a script and records every call.
///
/// Responses are keyed by command-line prefix (`"uv run mypy"`); the longest
/// matching prefix wins. Unscripted commands succeed with empty output.
#[derive(Debug, Default)]
pub struct FakeToolchain {
    missing: Vec<String>,
    responses: Vec<(String, Result<ToolOutput, ()>)>,
    calls: RefCell<Vec<String>>,
    dirs: RefCell<Vec<Option<PathBuf>>>,
}

impl FakeToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` absent from `PATH`.
    pub fn without(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    pub fn respond(mut self, prefix: &str, output: ToolOutput) -> Self {
        self.responses.push((prefix.to_string(), Ok(output)));
        self
    }

    /// Make commands starting with `prefix` fail to spawn.
    pub fn fail(mut self, prefix: &str) -> Self {
        self.responses.push((prefix.to_string(), Err(())));
        self
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Working directory passed with each call, parallel to [`calls`](Self::calls).
    pub fn dirs(&self) -> Vec<Option<PathBuf>> {
        self.dirs.borrow().clone()
    }

    pub fn ran(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(prefix))
    }
}

impl Toolchain for FakeToolchain {
    fn which(&self, program: &str) -> bool {
        !self.missing.iter().any(|m| m == program)
    }

    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<ToolOutput, ToolError> {
        let line = std::iter::once(program)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(line.clone());
        self.dirs.borrow_mut().push(cwd.map(Path::to_path_buf));

        let scripted = self
            .responses
            .iter()
            .filter(|(prefix, _)| line.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, response)| response.clone());

        match scripted {
            Some(Ok(output)) => Ok(output),
            Some(Err(())) => Err(ToolError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted failure"),
            }),
            None => Ok(ToolOutput::ok(&[])),
        }
    }
}
