use crate::config::PolicyConfig;
use crate::eval::{Arbiter, Disposition, Phase, Verdict};
use crate::parse::extract_intents;
use crate::policy::Policy;
use crate::protocol::HookInput;
use crate::tools::Toolchain;

/// Approve anything that is not a Bash call; otherwise validate the command.
pub fn run(input: &HookInput, config: &PolicyConfig, toolchain: &dyn Toolchain) -> Verdict {
    if input.tool_name() != "Bash" {
        return Verdict::new(Disposition::Approve);
    }
    let command = input.command().unwrap_or_default();
    evaluate(command, config, toolchain, input.cwd())
}

/// Extract intents from `command`, judge them, and arbitrate at the configured level.
pub fn evaluate(
    command: &str,
    config: &PolicyConfig,
    toolchain: &dyn Toolchain,
    cwd: &std::path::Path,
) -> Verdict {
    let intents = extract_intents(command);
    log::debug!("intents: {intents:?}");
    let policy = Policy::new(config, toolchain, cwd);
    Arbiter::new(config.level, Phase::Pre).judge(intents.iter().map(|intent| policy.judge(intent)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Level;
    use crate::tools::{FakeToolchain, ToolOutput};

    fn input(tool: &str, command: &str) -> HookInput {
        HookInput::parse(
            &serde_json::json!({"tool_name": tool, "tool_input": {"command": command}, "cwd": "/tmp"})
                .to_string(),
        )
    }

    fn config(level: Level) -> PolicyConfig {
        PolicyConfig {
            level,
            ..PolicyConfig::default()
        }
    }

    #[test]
    fn non_bash_is_approved() {
        let fake = FakeToolchain::new();
        let v = run(&input("Write", "git push origin main"), &config(Level::Strict), &fake);
        assert_eq!(v.disposition, Disposition::Approve);
    }

    #[test]
    fn empty_event_is_approved() {
        let fake = FakeToolchain::new();
        let v = run(&HookInput::default(), &config(Level::Strict), &fake);
        assert_eq!(v.disposition, Disposition::Approve);
    }

    #[test]
    fn strict_bad_commit_skips_push_query() {
        let fake = FakeToolchain::new().respond("git rev-parse", ToolOutput::ok(&["main"]));
        let v = run(
            &input("Bash", "git commit -m 'wip' && git push"),
            &config(Level::Strict),
            &fake,
        );
        assert!(matches!(v.disposition, Disposition::Block { ref reason, .. } if reason == "Invalid commit message: wip"));
        assert!(fake.calls().is_empty());
    }

    #[test]
    fn moderate_collects_every_warning() {
        let fake = FakeToolchain::new().respond("git rev-parse", ToolOutput::ok(&["main"]));
        let v = run(
            &input("Bash", "git checkout -b wip && git commit -m 'wip' && git push"),
            &config(Level::Moderate),
            &fake,
        );
        assert_eq!(v.disposition, Disposition::Approve);
        assert_eq!(v.warnings.len(), 3);
        assert!(v.warnings[2].contains("protected branch"));
    }

    #[test]
    fn bare_push_queries_branch_in_event_cwd() {
        let fake = FakeToolchain::new().respond("git rev-parse", ToolOutput::ok(&["main"]));
        let event = HookInput::parse(
            &serde_json::json!({"tool_name": "Bash", "tool_input": {"command": "git push"}, "cwd": "/repo"})
                .to_string(),
        );
        let v = run(&event, &config(Level::Strict), &fake);
        assert!(v.disposition.is_block());
        assert_eq!(fake.calls(), vec!["git rev-parse --abbrev-ref HEAD"]);
        assert_eq!(fake.dirs(), vec![Some(std::path::PathBuf::from("/repo"))]);
    }

    #[test]
    fn bare_push_without_cwd_queries_current_dir() {
        let fake = FakeToolchain::new();
        let event = HookInput::parse(r#"{"tool_name": "Bash", "tool_input": {"command": "git push"}}"#);
        run(&event, &config(Level::Strict), &fake);
        assert_eq!(fake.dirs(), vec![Some(std::path::PathBuf::from("."))]);
    }

    #[test]
    fn minimal_runs_nothing() {
        let fake = FakeToolchain::new();
        let v = run(&input("Bash", "git push"), &config(Level::Minimal), &fake);
        assert_eq!(v, Verdict::new(Disposition::Approve));
        assert!(fake.calls().is_empty());
    }
}
