//! Command intent extraction.
//!
//! Everything here is textual and heuristic: commands are never executed or
//! fully shell-parsed. Exotic quoting, nested subshells and unusual flag
//! ordering can make extraction under- or over-match.

pub mod context;
pub mod intent;
pub mod shell;
pub mod tokenize;

pub use context::CommandContext;
pub use intent::{CommandIntent, extract_intents};
pub use shell::split;
pub use tokenize::{is_flag, tokenize};
