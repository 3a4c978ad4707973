//! Decision types and the strictness arbiter.

pub mod arbiter;
pub mod decision;

pub use arbiter::{Arbiter, FormatPlan};
pub use decision::{
    Disposition, Finding, FindingSource, Judgement, Phase, ValidationOutcome, Verdict,
};
