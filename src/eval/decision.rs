/// Final outcome of one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Approve,
    /// `reason` is short and machine-directed; `detail` explains the expected
    /// format or required action.
    Block {
        reason: String,
        detail: Option<String>,
    },
    /// Nothing to say: post-action hooks use this when the action is fine.
    NoResponse,
}

impl Disposition {
    pub fn block(reason: impl Into<String>) -> Self {
        Disposition::Block {
            reason: reason.into(),
            detail: None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Approve => "approve",
            Disposition::Block { .. } => "block",
            Disposition::NoResponse => "none",
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Disposition::Block { .. })
    }
}

/// Whether the hook fires before the host acts (and can stop it) or after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pre,
    Post,
}

impl Phase {
    /// Disposition for an invocation with nothing to report.
    pub fn success(self) -> Disposition {
        match self {
            Phase::Pre => Disposition::Approve,
            Phase::Post => Disposition::NoResponse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub remediation: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            remediation: None,
        }
    }

    pub fn invalid(remediation: impl Into<String>) -> Self {
        Self {
            valid: false,
            remediation: Some(remediation.into()),
        }
    }
}

/// A validation outcome paired with the block reason used if it escalates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    pub reason: String,
    pub outcome: ValidationOutcome,
}

/// Disposition plus the side-channel warnings gathered on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub disposition: Disposition,
    pub warnings: Vec<String>,
}

impl Verdict {
    pub fn new(disposition: Disposition) -> Self {
        Self {
            disposition,
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingSource {
    Lint,
    Type,
}

impl FindingSource {
    pub fn label(self) -> &'static str {
        match self {
            FindingSource::Lint => "Lint",
            FindingSource::Type => "Type",
        }
    }
}

/// One diagnostic line reported by an external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub source: FindingSource,
    pub line: String,
}

impl Finding {
    pub fn lint(line: impl Into<String>) -> Self {
        Self {
            source: FindingSource::Lint,
            line: line.into(),
        }
    }

    pub fn type_error(line: impl Into<String>) -> Self {
        Self {
            source: FindingSource::Type,
            line: line.into(),
        }
    }
}
