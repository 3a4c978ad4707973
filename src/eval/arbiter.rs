//! Strictness arbitration: the single place where block / warn / allow is decided.
//!
//! | level    | invalid intent        | leftover lint/type findings |
//! |----------|-----------------------|-----------------------------|
//! | strict   | block, stop at first  | block (reported)            |
//! | moderate | warn, keep going      | warn                        |
//! | minimal  | not evaluated         | no linting at all           |
//!
//! Missing tooling blocks at every level.

use super::decision::{Disposition, Finding, FindingSource, Judgement, Phase, Verdict};
use crate::config::Level;
use crate::tools::python::{MODERATE_RULES, RuleSet};

/// Which post-action passes run for a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPlan {
    /// Block before formatting when the future-annotations import is missing.
    pub require_future_annotations: bool,
    /// Rule set for the auto-fix and check passes; `None` runs the formatter only.
    pub lint: Option<RuleSet>,
    pub type_check: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Arbiter {
    level: Level,
    phase: Phase,
}

impl Arbiter {
    pub fn new(level: Level, phase: Phase) -> Self {
        Self { level, phase }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Arbitrate a sequence of intent judgements.
    ///
    /// The sequence is pulled lazily: strict stops at the first invalid
    /// judgement and minimal pulls nothing, so later checks (and any tool
    /// calls behind them) never run.
    pub fn judge<I>(&self, judgements: I) -> Verdict
    where
        I: IntoIterator<Item = Judgement>,
    {
        let mut verdict = Verdict::new(self.phase.success());
        if self.level == Level::Minimal {
            return verdict;
        }

        for judgement in judgements {
            if judgement.outcome.valid {
                continue;
            }
            let remediation = judgement.outcome.remediation;
            match self.level {
                Level::Strict => {
                    verdict.disposition = Disposition::Block {
                        reason: judgement.reason,
                        detail: remediation,
                    };
                    return verdict;
                }
                Level::Moderate => verdict.warnings.push(format!(
                    "Warning: {}",
                    remediation.as_deref().unwrap_or(&judgement.reason)
                )),
                Level::Minimal => {}
            }
        }
        verdict
    }

    /// Passes to run after a Python file was written.
    pub fn format_plan(&self) -> FormatPlan {
        match self.level {
            Level::Strict => FormatPlan {
                require_future_annotations: true,
                lint: Some(RuleSet::Project),
                type_check: true,
            },
            Level::Moderate => FormatPlan {
                require_future_annotations: false,
                lint: Some(RuleSet::Select(MODERATE_RULES)),
                type_check: false,
            },
            Level::Minimal => FormatPlan {
                require_future_annotations: false,
                lint: None,
                type_check: false,
            },
        }
    }

    /// Arbitrate findings left over after formatting `file`.
    ///
    /// Strict reports them as a block even in the post-action phase so the
    /// host acts on them in its next turn.
    pub fn report(&self, file: &str, findings: Vec<Finding>) -> Verdict {
        let mut verdict = Verdict::new(self.phase.success());
        match self.level {
            Level::Minimal => {}
            Level::Moderate => {
                verdict.warnings = findings
                    .into_iter()
                    .map(|f| format!("Warning: {}", f.line))
                    .collect();
            }
            Level::Strict => {
                let sections: Vec<String> = [FindingSource::Lint, FindingSource::Type]
                    .into_iter()
                    .filter_map(|source| section(file, source, &findings))
                    .collect();
                if !sections.is_empty() {
                    verdict.disposition = Disposition::block(sections.join("\n\n"));
                }
            }
        }
        verdict
    }

    /// Block at any level: an unmet precondition or a strict-only gate
    /// that already decided.
    pub fn block(&self, reason: impl Into<String>) -> Verdict {
        Verdict::new(Disposition::block(reason))
    }

    /// Required tooling is absent; nothing can be enforced without it.
    pub fn missing_dependency(&self, message: &str) -> Verdict {
        self.block(format!("Missing dependency: {message}"))
    }
}

fn section(file: &str, source: FindingSource, findings: &[Finding]) -> Option<String> {
    let lines: Vec<&str> = findings
        .iter()
        .filter(|f| f.source == source)
        .map(|f| f.line.as_str())
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(format!(
        "{} errors in {file}:\n{}",
        source.label(),
        lines.join("\n")
    ))
}
