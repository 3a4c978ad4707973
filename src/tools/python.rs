//! uv / ruff / black / mypy invocations for a single Python file.

use super::{ToolOutput, Toolchain};
use crate::config::PythonTarget;
use crate::eval::Finding;

/// Rule selection for moderate mode: pycodestyle, pyflakes, isort, bugbear, pyupgrade.
pub const MODERATE_RULES: &str = "E,W,F,I,B,UP";

pub const FUTURE_IMPORT: &str = "from __future__ import annotations";

const UV_MISSING: &str = "uv not found. Install: curl -LsSf https://astral.sh/uv/install.sh | sh";
const RUFF_MISSING: &str = "ruff not found in project. Run: uv add --dev ruff";
const BLACK_MISSING: &str = "black not found in project. Run: uv add --dev black";
const MYPY_MISSING: &str = "mypy not found in project. Run: uv add --dev mypy";

/// Which ruff rules a lint pass applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSet {
    /// The project's own configuration plus target-version adjustments.
    Project,
    /// An explicit `--select` list.
    Select(&'static str),
}

pub struct PythonTools<'a> {
    toolchain: &'a dyn Toolchain,
    target: &'a PythonTarget,
}

impl<'a> PythonTools<'a> {
    pub fn new(toolchain: &'a dyn Toolchain, target: &'a PythonTarget) -> Self {
        Self { toolchain, target }
    }

    /// Install hint for the first missing tool, if any.
    pub fn missing_dependency(&self) -> Option<&'static str> {
        if !self.toolchain.which("uv") {
            return Some(UV_MISSING);
        }
        if !self.probe("ruff") {
            return Some(RUFF_MISSING);
        }
        if !self.probe("black") {
            return Some(BLACK_MISSING);
        }
        None
    }

    /// Auto-fix pass. Its output is not inspected.
    pub fn fix(&self, file: &str, rules: &RuleSet) {
        self.uv(self.ruff_fix_args(file, rules));
    }

    pub fn black(&self, file: &str) {
        self.uv(vec!["black".into(), file.into()]);
    }

    /// Non-mutating pass reporting what auto-fix could not repair.
    pub fn lint(&self, file: &str, rules: &RuleSet) -> Vec<Finding> {
        self.uv(self.ruff_check_args(file, rules))
            .map(|out| out.diagnostics().into_iter().map(Finding::lint).collect())
            .unwrap_or_default()
    }

    pub fn type_check(&self, file: &str) -> Vec<Finding> {
        if !self.probe("mypy") {
            return vec![Finding::type_error(MYPY_MISSING)];
        }
        let args = vec![
            "mypy".into(),
            "--strict".into(),
            "--python-version".into(),
            self.target.mypy_version(),
            file.into(),
        ];
        self.uv(args)
            .map(|out| out.diagnostics().into_iter().map(Finding::type_error).collect())
            .unwrap_or_default()
    }

    fn ruff_fix_args(&self, file: &str, rules: &RuleSet) -> Vec<String> {
        let mut args = vec![
            "ruff".into(),
            "check".into(),
            "--fix".into(),
            "--target-version".into(),
            self.target.as_str().into(),
        ];
        match rules {
            RuleSet::Project => self.push_version_rules(&mut args),
            RuleSet::Select(select) => args.push(format!("--select={select}")),
        }
        args.push(file.into());
        args
    }

    fn ruff_check_args(&self, file: &str, rules: &RuleSet) -> Vec<String> {
        let mut args = vec![
            "ruff".into(),
            "check".into(),
            "--target-version".into(),
            self.target.as_str().into(),
        ];
        if let RuleSet::Select(select) = rules {
            args.push(format!("--select={select}"));
        }
        self.push_version_rules(&mut args);
        args.push(file.into());
        args
    }

    fn push_version_rules(&self, args: &mut Vec<String>) {
        for rule in self.target.ruff_ignores() {
            args.push("--ignore".into());
            args.push((*rule).into());
        }
        for rule in self.target.ruff_extra_rules() {
            args.push("--extend-select".into());
            args.push((*rule).into());
        }
    }

    /// `uv run <tool> --version` succeeds.
    fn probe(&self, tool: &str) -> bool {
        self.uv(vec![tool.into(), "--version".into()])
            .is_some_and(|out| out.success())
    }

    /// `uv run <args>`; a spawn failure is logged and yields `None`.
    fn uv(&self, args: Vec<String>) -> Option<ToolOutput> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push("run".to_string());
        full.extend(args);
        match self.toolchain.run("uv", &full, None) {
            Ok(out) => Some(out),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }
}

/// Require the future-annotations import in any file with real code.
///
/// Files that are empty or hold only comments pass.
pub fn check_future_annotations(content: &str) -> Result<(), &'static str> {
    let has_code = content.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if has_code && !content.contains(FUTURE_IMPORT) {
        return Err("Missing 'from __future__ import annotations' at top of file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::FakeToolchain;

    fn tools<'a>(fake: &'a FakeToolchain, target: &'a PythonTarget) -> PythonTools<'a> {
        PythonTools::new(fake, target)
    }

    #[test]
    fn all_dependencies_present() {
        let fake = FakeToolchain::new();
        let target = PythonTarget::default();
        assert_eq!(tools(&fake, &target).missing_dependency(), None);
        assert_eq!(
            fake.calls(),
            vec!["uv run ruff --version", "uv run black --version"]
        );
    }

    #[test]
    fn missing_uv_is_reported_first() {
        let fake = FakeToolchain::new().without("uv");
        let target = PythonTarget::default();
        assert_eq!(tools(&fake, &target).missing_dependency(), Some(UV_MISSING));
        assert!(fake.calls().is_empty());
    }

    #[test]
    fn missing_black() {
        let fake = FakeToolchain::new().respond("uv run black --version", ToolOutput::failed(2, &[]));
        let target = PythonTarget::default();
        assert_eq!(tools(&fake, &target).missing_dependency(), Some(BLACK_MISSING));
    }

    #[test]
    fn ruff_probe_spawn_failure_counts_as_missing() {
        let fake = FakeToolchain::new().fail("uv run ruff");
        let target = PythonTarget::default();
        assert_eq!(tools(&fake, &target).missing_dependency(), Some(RUFF_MISSING));
    }

    #[test]
    fn project_fix_args_carry_version_rules() {
        let fake = FakeToolchain::new();
        let target = PythonTarget::new("py39");
        tools(&fake, &target).fix("a.py", &RuleSet::Project);
        assert_eq!(
            fake.calls(),
            vec!["uv run ruff check --fix --target-version py39 --ignore UP036 --extend-select FA a.py"]
        );
    }

    #[test]
    fn moderate_fix_args_only_select() {
        let fake = FakeToolchain::new();
        let target = PythonTarget::new("py39");
        tools(&fake, &target).fix("a.py", &RuleSet::Select(MODERATE_RULES));
        assert_eq!(
            fake.calls(),
            vec!["uv run ruff check --fix --target-version py39 --select=E,W,F,I,B,UP a.py"]
        );
    }

    #[test]
    fn moderate_check_args_add_version_rules() {
        let fake = FakeToolchain::new();
        let target = PythonTarget::new("py310");
        tools(&fake, &target).lint("a.py", &RuleSet::Select(MODERATE_RULES));
        assert_eq!(
            fake.calls(),
            vec!["uv run ruff check --target-version py310 --select=E,W,F,I,B,UP --extend-select FA a.py"]
        );
    }

    #[test]
    fn lint_collects_diagnostics() {
        let fake = FakeToolchain::new().respond(
            "uv run ruff check --target-version",
            ToolOutput::failed(1, &["a.py:3:5: SLF001 Private member accessed: `_x`", "Found 1 error."]),
        );
        let target = PythonTarget::default();
        assert_eq!(
            tools(&fake, &target).lint("a.py", &RuleSet::Project),
            vec![Finding::lint("a.py:3:5: SLF001 Private member accessed: `_x`")]
        );
    }

    #[test]
    fn lint_spawn_failure_is_no_findings() {
        let fake = FakeToolchain::new().fail("uv run ruff");
        let target = PythonTarget::default();
        assert!(tools(&fake, &target).lint("a.py", &RuleSet::Project).is_empty());
    }

    #[test]
    fn type_check_uses_mypy_version() {
        let fake = FakeToolchain::new().respond(
            "uv run mypy --strict",
            ToolOutput::failed(1, &["a.py:1: error: Function is missing a type annotation", "Found 1 error in 1 file"]),
        );
        let target = PythonTarget::new("py311");
        let findings = tools(&fake, &target).type_check("a.py");
        assert_eq!(
            findings,
            vec![Finding::type_error("a.py:1: error: Function is missing a type annotation")]
        );
        assert!(fake.ran("uv run mypy --strict --python-version 3.11 a.py"));
    }

    #[test]
    fn type_check_without_mypy() {
        let fake = FakeToolchain::new().respond("uv run mypy --version", ToolOutput::failed(1, &[]));
        let target = PythonTarget::default();
        assert_eq!(
            tools(&fake, &target).type_check("a.py"),
            vec![Finding::type_error(MYPY_MISSING)]
        );
        assert!(!fake.ran("uv run mypy --strict"));
    }

    #[test]
    fn future_annotations() {
        assert!(check_future_annotations("").is_ok());
        assert!(check_future_annotations("# just a comment\n\n   # another\n").is_ok());
        assert!(check_future_annotations("from __future__ import annotations\n\nx = 1\n").is_ok());
        assert!(check_future_annotations("def foo(x: str | None) -> None:\n    pass\n").is_err());
        assert!(check_future_annotations("\"\"\"Docstring only.\"\"\"\n").is_err());
    }
}
