//! GitHub CLI gate.

use crate::eval::ValidationOutcome;

/// Merging a pull request always needs a human, at every strictness level.
pub fn validate_merge() -> ValidationOutcome {
    ValidationOutcome::invalid("PR merges require human approval. Review and merge manually.")
}
