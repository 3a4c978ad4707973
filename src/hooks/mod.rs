//! Hook workflows: one per host event type.

/// PostToolUse on Edit/Write: format, lint and type-check Python files.
pub mod format_python;
/// PreToolUse on Bash: branch, commit, push and merge conventions.
pub mod validate_git;

use crate::config::PolicyConfig;
use crate::eval::Verdict;
use crate::protocol::HookInput;
use crate::tools::Toolchain;

/// A hook workflow, named on the command line as `validate-git` or `format-python`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Hook {
    /// Check branch, commit, push and merge conventions in a Bash command
    ValidateGit,
    /// Format and check a Python file after Edit/Write
    FormatPython,
}

impl Hook {
    /// Pick a hook from the event's tool when none was named.
    pub fn for_tool(tool_name: &str) -> Option<Self> {
        match tool_name {
            "Bash" => Some(Hook::ValidateGit),
            "Edit" | "Write" => Some(Hook::FormatPython),
            _ => None,
        }
    }

    pub fn run(self, input: &HookInput, config: &PolicyConfig, toolchain: &dyn Toolchain) -> Verdict {
        match self {
            Hook::ValidateGit => validate_git::run(input, config, toolchain),
            Hook::FormatPython => format_python::run(input, config, toolchain),
        }
    }
}
