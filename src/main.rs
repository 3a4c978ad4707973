//! pydev-hooks: Claude Code hook entry point.
//!
//! Reads one JSON event from stdin and writes at most one JSON decision line
//! to stdout. Warnings go to stderr. The exit status is always 0.
//!
//! Usage: `pydev-hooks [validate-git|format-python]`. Without an argument the
//! workflow is picked from the event's `tool_name`.

mod cli;

use std::io::Read;

use clap::Parser;
use pydev_hooks::config::PolicyConfig;
use pydev_hooks::eval::Verdict;
use pydev_hooks::hooks::Hook;
use pydev_hooks::protocol::{self, HookInput};
use pydev_hooks::tools::SystemToolchain;

fn main() {
    pydev_hooks::logging::init();

    // `--help`/`--version` and bad arguments alike end here, still exiting 0.
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };

    let mut raw = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut raw) {
        log::warn!("failed to read stdin: {e}");
        raw.clear();
    }
    let input = HookInput::parse(&raw);
    log::debug!(
        "event {} for {}",
        input.hook_event_name.as_deref().unwrap_or("?"),
        input.tool_name()
    );

    let Some(hook) = cli.hook.or_else(|| Hook::for_tool(input.tool_name())) else {
        return;
    };

    let config = PolicyConfig::load();
    let verdict = hook.run(&input, &config, &SystemToolchain);
    pydev_hooks::logging::log_decision(&input.summary(), &verdict.disposition);
    emit(verdict);
}

fn emit(verdict: Verdict) {
    for warning in &verdict.warnings {
        eprintln!("{warning}");
    }
    if let Some(line) = protocol::encode(&verdict.disposition) {
        println!("{line}");
    }
}
