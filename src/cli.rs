//! CLI argument parsing via `clap`.

use clap::Parser;
use pydev_hooks::hooks::Hook;

#[derive(Parser, Debug)]
#[command(
    name = "pydev-hooks",
    version,
    about = "Claude Code hooks enforcing git conventions and Python code quality",
    long_about = "Reads one hook event as JSON on stdin and writes at most one JSON decision line to stdout.\n\nWarnings go to stderr. The exit status is always 0.",
    after_help = "Examples:\n  pydev-hooks validate-git < event.json\n  pydev-hooks < event.json"
)]
pub struct Cli {
    /// Workflow to run; picked from the event's `tool_name` when omitted
    #[arg(value_enum)]
    pub hook: Option<Hook>,
}
