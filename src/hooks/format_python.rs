use std::path::Path;

use crate::config::PolicyConfig;
use crate::eval::{Arbiter, Disposition, Phase, Verdict};
use crate::protocol::HookInput;
use crate::tools::Toolchain;
use crate::tools::python::{PythonTools, check_future_annotations};

/// Format and check a Python file the host just wrote.
///
/// Events for other tools, other file types, or files that no longer exist
/// produce no response and run no tools.
pub fn run(input: &HookInput, config: &PolicyConfig, toolchain: &dyn Toolchain) -> Verdict {
    let silent = Verdict::new(Disposition::NoResponse);
    if !matches!(input.tool_name(), "Edit" | "Write") {
        return silent;
    }
    let Some(file) = input.file_path() else {
        return silent;
    };
    if !(file.ends_with(".py") || file.ends_with(".pyi")) || !Path::new(file).exists() {
        return silent;
    }

    let arbiter = Arbiter::new(config.level, Phase::Post);
    let tools = PythonTools::new(toolchain, &config.target);

    if let Some(message) = tools.missing_dependency() {
        return arbiter.missing_dependency(message);
    }

    let plan = arbiter.format_plan();
    if plan.require_future_annotations {
        match std::fs::read_to_string(file) {
            Ok(content) => {
                if let Err(message) = check_future_annotations(&content) {
                    return arbiter.block(message);
                }
            }
            Err(e) => log::warn!("cannot read {file}: {e}"),
        }
    }

    if let Some(rules) = &plan.lint {
        tools.fix(file, rules);
    }
    tools.black(file);

    let mut findings = Vec::new();
    if let Some(rules) = &plan.lint {
        findings.extend(tools.lint(file, rules));
    }
    if plan.type_check {
        findings.extend(tools.type_check(file));
    }
    log::debug!("{} finding(s) in {file} at {}", findings.len(), arbiter.level().as_str());

    arbiter.report(file, findings)
}
