//! pydev-hooks: Claude Code hooks that enforce git conventions and Python
//! code quality at a configurable strictness level.
//!
//! Two workflows share one policy engine:
//! - **validate-git** (PreToolUse, Bash): extracts branch-creation, commit,
//!   push and PR-merge intents from the proposed command and checks them
//!   against naming conventions and protected branches.
//! - **format-python** (PostToolUse, Edit/Write): runs ruff, black and mypy
//!   through `uv` on the written file.
//!
//! Each invocation ends in one [`eval::Disposition`]: approve, block, or no
//! response. The level (`strict`, `moderate`, `minimal`) decides whether an
//! invalid intent or leftover finding blocks, warns, or passes silently.
//!
//! # Architecture
//!
//! - **[`parse`]**: intent extraction from raw command text (regex + quote-aware splitting).
//! - **[`policy`]**: intent validation; level-independent.
//! - **[`eval`]**: decision types and the strictness [`eval::Arbiter`].
//! - **[`tools`]**: the external tool capability and the uv/ruff/black/mypy passes.
//! - **[`hooks`]**: the two workflows.
//! - **[`protocol`]**: stdin event / stdout response JSON.
//! - **[`config`]**: settings.json + pyproject.toml resolution.
//! - **[`logging`]**: decision log at `~/.local/share/pydev-hooks/hooks.log`.

/// Configuration types and layered loading.
pub mod config;
/// Error types for configuration and tool execution.
pub mod error;
/// Decisions and strictness arbitration.
pub mod eval;
/// Hook workflows.
pub mod hooks;
/// File-based decision logging.
pub mod logging;
/// Command intent extraction.
pub mod parse;
/// Intent validation rules.
pub mod policy;
/// Host wire format.
pub mod protocol;
/// External tool capability.
pub mod tools;

use config::PolicyConfig;
use eval::Verdict;

/// Validate a shell command under `config`, querying git in the current
/// directory when a bare push needs its target branch.
///
/// This is the main entry point for tests and simple usage.
pub fn evaluate(command: &str, config: &PolicyConfig, toolchain: &dyn tools::Toolchain) -> Verdict {
    hooks::validate_git::evaluate(command, config, toolchain, std::path::Path::new("."))
}
