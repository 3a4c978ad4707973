use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::ConfigError;

pub const DEFAULT_BRANCH_TYPES: &[&str] = &[
    "feature", "bugfix", "hotfix", "refactor", "docs", "test", "chore",
];

pub const DEFAULT_COMMIT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// Newest supported interpreter, used whenever detection finds nothing.
pub const DEFAULT_TARGET: &str = "py312";

/// `>=3.9`, `>3.10`, `~=3.11` → captures the minor version.
static REQUIRES_PYTHON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:>=?|~=)\s*3\.(\d+)").expect("requires-python pattern must compile")
});

// ── Final (resolved) config types ──

/// Enforcement intensity.
///
/// Ordered by strength so `Level::Strict > Level::Moderate > Level::Minimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Level {
    Minimal,
    Moderate,
    #[default]
    Strict,
}

impl Level {
    /// Parse a configured level. Anything unrecognized resolves to `Strict`.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "moderate" => Level::Moderate,
            "minimal" => Level::Minimal,
            _ => Level::Strict,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Strict => "strict",
            Level::Moderate => "moderate",
            Level::Minimal => "minimal",
        }
    }
}

/// Target Python version token as ruff spells it (`py39`, `py312`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonTarget(String);

impl PythonTarget {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Version in mypy's `--python-version` form: `py39` → `3.9`.
    pub fn mypy_version(&self) -> String {
        self.0.replacen("py3", "3.", 1)
    }

    /// Rules to ignore for this target (3.9 has no match statement).
    pub fn ruff_ignores(&self) -> &'static [&'static str] {
        match self.0.as_str() {
            "py39" => &["UP036"],
            _ => &[],
        }
    }

    /// Rules to add for this target (flake8-future-annotations before 3.11).
    pub fn ruff_extra_rules(&self) -> &'static [&'static str] {
        match self.0.as_str() {
            "py39" | "py310" => &["FA"],
            _ => &[],
        }
    }
}

impl Default for PythonTarget {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

/// Immutable policy configuration, resolved once per hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub level: Level,
    pub branch_types: Vec<String>,
    pub commit_types: Vec<String>,
    pub target: PythonTarget,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            branch_types: DEFAULT_BRANCH_TYPES.iter().map(|s| s.to_string()).collect(),
            commit_types: DEFAULT_COMMIT_TYPES.iter().map(|s| s.to_string()).collect(),
            target: PythonTarget::default(),
        }
    }
}

// ── Overlay types (what the files may contain) ──

#[derive(Debug, Deserialize, Default)]
struct SettingsDocument {
    #[serde(default)]
    plugins: PluginsSection,
}

#[derive(Debug, Deserialize, Default)]
struct PluginsSection {
    /// Our key under `plugins` in `.claude/settings.json`.
    #[serde(rename = "python-dev-framework", default)]
    framework: PluginOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct PluginOverlay {
    level: Option<String>,
    branch_types: Option<Vec<String>>,
    commit_types: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct PyProject {
    #[serde(default)]
    tool: ToolTable,
    #[serde(default)]
    project: ProjectTable,
}

#[derive(Debug, Deserialize, Default)]
struct ToolTable {
    #[serde(default)]
    ruff: RuffTable,
}

#[derive(Debug, Deserialize, Default)]
struct RuffTable {
    #[serde(rename = "target-version")]
    target_version: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ProjectTable {
    #[serde(rename = "requires-python")]
    requires_python: Option<String>,
}

// ── Loading ──

/// The consumer project directory: `$CLAUDE_PROJECT_DIR`, else `.`.
pub fn project_dir() -> PathBuf {
    std::env::var_os("CLAUDE_PROJECT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Detect the target Python version from `<project_root>/pyproject.toml`.
///
/// Priority: `tool.ruff.target-version`, then `project.requires-python`,
/// then [`DEFAULT_TARGET`]. Read and parse failures fall back to the default.
pub fn detect_python_target(project_root: &Path) -> PythonTarget {
    let pyproject = match read_pyproject(&project_root.join("pyproject.toml")) {
        Ok(Some(p)) => p,
        Ok(None) => return PythonTarget::default(),
        Err(e) => {
            log::warn!("{e}");
            return PythonTarget::default();
        }
    };

    if let Some(target) = pyproject.tool.ruff.target_version
        && !target.is_empty()
    {
        return PythonTarget::new(target);
    }

    pyproject
        .project
        .requires_python
        .as_deref()
        .and_then(|requirement| REQUIRES_PYTHON.captures(requirement))
        .map(|caps| PythonTarget::new(format!("py3{}", &caps[1])))
        .unwrap_or_default()
}

fn read_pyproject(path: &Path) -> Result<Option<PyProject>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
}

fn read_settings(path: &Path) -> Result<Option<PluginOverlay>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: SettingsDocument =
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(doc.plugins.framework))
}

impl PolicyConfig {
    /// Load configuration for the project named by `$CLAUDE_PROJECT_DIR`.
    pub fn load() -> Self {
        Self::load_from(&project_dir())
    }

    /// Load configuration with resolution order:
    /// 1. `<root>/.claude/settings.json` (level and prefix lists)
    /// 2. `<root>/pyproject.toml` (target version only)
    /// 3. Built-in defaults
    ///
    /// Any missing or malformed layer is treated as absent.
    pub fn load_from(project_root: &Path) -> Self {
        let mut config = Self {
            target: detect_python_target(project_root),
            ..Self::default()
        };
        let settings = project_root.join(".claude").join("settings.json");
        match read_settings(&settings) {
            Ok(Some(overlay)) => config.apply_overlay(overlay),
            Ok(None) => log::debug!("no settings at {}", settings.display()),
            Err(e) => log::warn!("{e}"),
        }
        config
    }

    fn apply_overlay(&mut self, overlay: PluginOverlay) {
        if let Some(level) = overlay.level {
            self.level = Level::from_setting(&level);
        }
        if let Some(types) = overlay.branch_types {
            self.branch_types = types;
        }
        if let Some(types) = overlay.commit_types {
            self.commit_types = types;
        }
    }

    /// Apply a plugin section from a JSON string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, json: &str) {
        let overlay: PluginOverlay = serde_json::from_str(json).unwrap();
        self.apply_overlay(overlay);
    }
}
