//! Pattern-based extraction of git/gh intents from a raw command string.

use regex::Regex;
use std::sync::LazyLock;

use super::{CommandContext, is_flag};

/// `git checkout -b <name>` / `git switch -c <name>`; trailing start points are ignored.
static BRANCH_CREATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"git\s+(?:checkout\s+-b|switch\s+-c)\s+(\S+)")
        .expect("branch pattern must compile")
});

/// `git commit -m "$(cat <<'EOF' ... EOF )"`: the message is the heredoc body.
static COMMIT_HEREDOC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)git\s+commit.*-m\s+"\$\(cat\s+<<['"]?EOF['"]?\s*\n(.+?)\nEOF"#)
        .expect("heredoc commit pattern must compile")
});

/// `git commit -m '...'`, `git commit -am "..."`.
static COMMIT_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"git\s+commit\s+(?:-[a-z]*m|-m)\s+["']([^"']+)["']"#)
        .expect("quoted commit pattern must compile")
});

static PR_MERGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bgh\s+pr\s+merge\b").expect("pr merge pattern must compile")
});

/// A structured fact extracted from a proposed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandIntent {
    BranchCreation {
        name: String,
    },
    CommitMessage {
        text: String,
    },
    /// `refspec: None` means the push targets the current branch.
    PushTarget {
        remote: Option<String>,
        refspec: Option<String>,
    },
    PullRequestMerge,
}

/// Extract every recognized intent, in the order branch, commit, push, merge.
///
/// Each kind is searched independently over the whole command, so a chained
/// `git commit ... && git push ...` yields both.
pub fn extract_intents(command: &str) -> Vec<CommandIntent> {
    let mut intents = Vec::new();
    if !command.contains("git") && !command.contains("gh") {
        return intents;
    }

    if let Some(name) = branch_name(command) {
        intents.push(CommandIntent::BranchCreation { name });
    }
    if let Some(text) = commit_message(command) {
        intents.push(CommandIntent::CommitMessage { text });
    }
    if let Some((remote, refspec)) = push_target(command) {
        intents.push(CommandIntent::PushTarget { remote, refspec });
    }
    if PR_MERGE.is_match(command) {
        intents.push(CommandIntent::PullRequestMerge);
    }
    intents
}

pub fn branch_name(command: &str) -> Option<String> {
    BRANCH_CREATE
        .captures(command)
        .map(|caps| caps[1].to_string())
}

/// The commit subject. For heredoc messages only the first line counts.
pub fn commit_message(command: &str) -> Option<String> {
    if let Some(caps) = COMMIT_HEREDOC.captures(command) {
        return caps[1].trim().lines().next().map(str::to_string);
    }
    COMMIT_QUOTED
        .captures(command)
        .map(|caps| caps[1].to_string())
}

/// `(remote, refspec)` of the first `git push` segment.
///
/// Leading flags after `push` are skipped; the next two words are taken
/// positionally. A flag with a separate value (`--repo url`) therefore puts
/// its value in the remote slot.
pub fn push_target(command: &str) -> Option<(Option<String>, Option<String>)> {
    super::split(command).iter().find_map(|segment| {
        let ctx = CommandContext::from_command(segment);
        let args = ctx.subcommand_args("git", "push")?;
        // A backslash line continuation tokenizes to an empty word.
        let mut positional = args
            .iter()
            .filter(|w| !w.is_empty())
            .skip_while(|w| is_flag(w))
            .cloned();
        Some((positional.next(), positional.next()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Branch creation ──

    #[test]
    fn checkout_b() {
        assert_eq!(
            branch_name("git checkout -b feature/add-auth").as_deref(),
            Some("feature/add-auth")
        );
    }

    #[test]
    fn switch_c() {
        assert_eq!(
            branch_name("git switch -c feature/add-auth").as_deref(),
            Some("feature/add-auth")
        );
    }

    #[test]
    fn checkout_with_start_point() {
        assert_eq!(
            branch_name("git checkout -b feature/add-auth origin/main").as_deref(),
            Some("feature/add-auth")
        );
    }

    #[test]
    fn plain_checkout_is_not_creation() {
        assert_eq!(branch_name("git checkout main"), None);
        assert_eq!(branch_name("git status"), None);
    }

    // ── Commit messages ──

    #[test]
    fn single_quoted_message() {
        assert_eq!(
            commit_message("git commit -m 'feat(auth): add login'").as_deref(),
            Some("feat(auth): add login")
        );
    }

    #[test]
    fn double_quoted_message() {
        assert_eq!(
            commit_message(r#"git commit -m "fix(api): handle 404 errors""#).as_deref(),
            Some("fix(api): handle 404 errors")
        );
    }

    #[test]
    fn combined_all_flag() {
        assert_eq!(
            commit_message(r#"git commit -am "fix: resolve bug""#).as_deref(),
            Some("fix: resolve bug")
        );
    }

    #[test]
    fn no_message_flag() {
        assert_eq!(commit_message("git commit"), None);
        assert_eq!(commit_message("git add ."), None);
    }

    #[test]
    fn heredoc_takes_first_line() {
        let cmd = "git commit -m \"$(cat <<'EOF'\nfeat(hooks): add validator\n\nLonger body here.\nEOF\n)\"";
        assert_eq!(
            commit_message(cmd).as_deref(),
            Some("feat(hooks): add validator")
        );
    }

    #[test]
    fn heredoc_unquoted_delimiter() {
        let cmd = "git commit -m \"$(cat <<EOF\n  fixed stuff\nEOF\n)\"";
        assert_eq!(commit_message(cmd).as_deref(), Some("fixed stuff"));
    }

    // ── Push targets ──

    #[test]
    fn push_remote_and_branch() {
        assert_eq!(
            push_target("git push origin main"),
            Some((Some("origin".into()), Some("main".into())))
        );
    }

    #[test]
    fn push_skips_leading_flags() {
        assert_eq!(
            push_target("git push -u origin feature/foo"),
            Some((Some("origin".into()), Some("feature/foo".into())))
        );
        assert_eq!(
            push_target("git push --force origin main"),
            Some((Some("origin".into()), Some("main".into())))
        );
    }

    #[test]
    fn bare_push() {
        assert_eq!(push_target("git push"), Some((None, None)));
        assert_eq!(push_target("git push --force"), Some((None, None)));
    }

    #[test]
    fn push_in_chain() {
        assert_eq!(
            push_target("git add . && git push origin main && echo done"),
            Some((Some("origin".into()), Some("main".into())))
        );
    }

    #[test]
    fn push_across_line_continuation() {
        assert_eq!(
            extract_intents("git push \\\n  origin main"),
            vec![CommandIntent::PushTarget {
                remote: Some("origin".into()),
                refspec: Some("main".into()),
            }]
        );
        assert_eq!(
            push_target("git push -u \\\n  origin feature/x"),
            Some((Some("origin".into()), Some("feature/x".into())))
        );
    }

    #[test]
    fn flag_value_lands_in_remote_slot() {
        assert_eq!(
            push_target("git push --repo https://example.com/r.git main"),
            Some((Some("https://example.com/r.git".into()), Some("main".into())))
        );
    }

    #[test]
    fn no_push() {
        assert_eq!(push_target("git pull origin main"), None);
    }

    // ── Combined ──

    #[test]
    fn unrelated_command_has_no_intents() {
        assert!(extract_intents("ls -la && cargo build").is_empty());
    }

    #[test]
    fn chained_command_yields_several_intents() {
        let intents =
            extract_intents(r#"git add . && git commit -m "feat: x" && git push origin main"#);
        assert_eq!(
            intents,
            vec![
                CommandIntent::CommitMessage {
                    text: "feat: x".into()
                },
                CommandIntent::PushTarget {
                    remote: Some("origin".into()),
                    refspec: Some("main".into())
                },
            ]
        );
    }

    #[test]
    fn pr_merge() {
        assert_eq!(
            extract_intents("gh pr merge 42 --squash"),
            vec![CommandIntent::PullRequestMerge]
        );
        assert!(extract_intents("gh pr view 42").is_empty());
        assert!(extract_intents("gh pr merged-list").is_empty());
    }

    #[test]
    fn creation_and_push_together() {
        let intents = extract_intents("git checkout -b feature/x && git push -u origin feature/x");
        assert_eq!(intents.len(), 2);
        assert!(matches!(intents[0], CommandIntent::BranchCreation { .. }));
        assert!(matches!(intents[1], CommandIntent::PushTarget { .. }));
    }
}
