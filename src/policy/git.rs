//! Branch-name, commit-message and push-target rules.

use regex::Regex;
use std::path::Path;

use crate::eval::ValidationOutcome;
use crate::tools::Toolchain;

/// Long-lived branches: exempt from naming rules.
pub const PERMANENT_BRANCHES: &[&str] = &["main", "master", "develop"];

/// Branches that only change through a reviewed pull request.
pub const PUSH_PROTECTED: &[&str] = &["main", "master"];

/// `^(t1|t2|...)<suffix>` with each type regex-escaped.
fn prefix_pattern(types: &[String], suffix: &str) -> Option<Regex> {
    let alternation = types
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&format!("^({alternation}){suffix}")) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("unusable type list {types:?}: {e}");
            None
        }
    }
}

pub struct BranchRule {
    pattern: Option<Regex>,
    types: Vec<String>,
}

impl BranchRule {
    pub fn new(types: &[String]) -> Self {
        Self {
            pattern: prefix_pattern(types, "/[a-z0-9-]+$"),
            types: types.to_vec(),
        }
    }

    pub fn validate(&self, name: &str) -> ValidationOutcome {
        if PERMANENT_BRANCHES.contains(&name)
            || self.pattern.as_ref().is_some_and(|p| p.is_match(name))
        {
            return ValidationOutcome::valid();
        }
        ValidationOutcome::invalid(format!(
            "Use format: type/description where type is one of: {}",
            self.types.join(", ")
        ))
    }
}

pub struct CommitRule {
    pattern: Option<Regex>,
    types: Vec<String>,
}

impl CommitRule {
    pub fn new(types: &[String]) -> Self {
        Self {
            pattern: prefix_pattern(types, r"(\(.+\))?: .+"),
            types: types.to_vec(),
        }
    }

    pub fn validate(&self, message: &str) -> ValidationOutcome {
        if self.pattern.as_ref().is_some_and(|p| p.is_match(message)) {
            return ValidationOutcome::valid();
        }
        ValidationOutcome::invalid(format!(
            "Use format: type(scope): description where type is one of: {}",
            self.types.join(", ")
        ))
    }
}

/// Current branch of the repository at `cwd`, or `None` if git can't say.
pub fn current_branch(toolchain: &dyn Toolchain, cwd: &Path) -> Option<String> {
    let args = ["rev-parse", "--abbrev-ref", "HEAD"].map(String::from);
    match toolchain.run("git", &args, Some(cwd)) {
        Ok(out) if out.success() => out.stdout_lines.first().map(|l| l.trim().to_string()),
        Ok(_) => None,
        Err(e) => {
            log::debug!("{e}");
            None
        }
    }
}

/// Pushing to a protected branch is invalid. Without an explicit refspec the
/// current branch is the target; if that is unknown the push is allowed.
pub fn validate_push(
    refspec: Option<&str>,
    toolchain: &dyn Toolchain,
    cwd: &Path,
) -> ValidationOutcome {
    let target = match refspec {
        Some(r) => Some(r.to_string()),
        None => current_branch(toolchain, cwd),
    };
    match target {
        Some(t) if PUSH_PROTECTED.contains(&t.as_str()) => {
            ValidationOutcome::invalid("Direct push to protected branch. Create a PR instead.")
        }
        _ => ValidationOutcome::valid(),
    }
}
