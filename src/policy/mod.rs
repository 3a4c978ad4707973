//! Intent validation.
//!
//! Validity never depends on the strictness level; the
//! [`Arbiter`](crate::eval::Arbiter) decides what an invalid outcome costs.

/// Pull-request merge gate.
pub mod gh;
/// Branch, commit and push rules.
pub mod git;

use std::path::Path;

use crate::config::PolicyConfig;
use crate::eval::Judgement;
use crate::parse::CommandIntent;
use crate::tools::Toolchain;
use git::{BranchRule, CommitRule};

/// Rules compiled from configuration, plus what a push check needs to ask git.
pub struct Policy<'a> {
    branch: BranchRule,
    commit: CommitRule,
    toolchain: &'a dyn Toolchain,
    cwd: &'a Path,
}

impl<'a> Policy<'a> {
    pub fn new(config: &PolicyConfig, toolchain: &'a dyn Toolchain, cwd: &'a Path) -> Self {
        Self {
            branch: BranchRule::new(&config.branch_types),
            commit: CommitRule::new(&config.commit_types),
            toolchain,
            cwd,
        }
    }

    pub fn judge(&self, intent: &CommandIntent) -> Judgement {
        match intent {
            CommandIntent::BranchCreation { name } => Judgement {
                reason: format!("Invalid branch: {name}"),
                outcome: self.branch.validate(name),
            },
            CommandIntent::CommitMessage { text } => Judgement {
                reason: format!("Invalid commit message: {text}"),
                outcome: self.commit.validate(text),
            },
            CommandIntent::PushTarget { refspec, .. } => Judgement {
                reason: "Push blocked".into(),
                outcome: git::validate_push(refspec.as_deref(), self.toolchain, self.cwd),
            },
            CommandIntent::PullRequestMerge => Judgement {
                reason: "PR merge blocked".into(),
                outcome: gh::validate_merge(),
            },
        }
    }
}
