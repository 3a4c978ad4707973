//! Hook wire format: the event read from stdin and the decision written to stdout.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::eval::Disposition;

/// Event payload sent by the host. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    pub tool_name: Option<String>,
    pub tool_input: Option<ToolInput>,
    pub cwd: Option<String>,
    pub hook_event_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    pub command: Option<String>,
    pub file_path: Option<String>,
}

impl HookInput {
    /// Parse an event. Malformed input becomes an empty event, which every
    /// hook treats as not applicable.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("unreadable hook input: {e}");
                Self::default()
            }
        }
    }

    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or("")
    }

    pub fn command(&self) -> Option<&str> {
        self.tool_input.as_ref()?.command.as_deref()
    }

    pub fn file_path(&self) -> Option<&str> {
        self.tool_input.as_ref()?.file_path.as_deref()
    }

    /// Working directory of the event, `.` when absent.
    pub fn cwd(&self) -> &Path {
        Path::new(self.cwd.as_deref().unwrap_or("."))
    }

    /// One-line description for the decision log.
    pub fn summary(&self) -> String {
        let target = self.command().or(self.file_path()).unwrap_or("");
        format!("{} {target}", self.tool_name())
    }
}

/// Structured response understood by the host.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum Response {
    Approve,
    Block {
        reason: String,
        #[serde(rename = "systemMessage", skip_serializing_if = "Option::is_none")]
        system_message: Option<String>,
    },
}

impl Response {
    /// `None` for [`Disposition::NoResponse`]: nothing is written.
    pub fn from_disposition(disposition: &Disposition) -> Option<Self> {
        match disposition {
            Disposition::Approve => Some(Response::Approve),
            Disposition::Block { reason, detail } => Some(Response::Block {
                reason: reason.clone(),
                system_message: detail.clone(),
            }),
            Disposition::NoResponse => None,
        }
    }
}

/// Encode a disposition as the single stdout line, if it has one.
pub fn encode(disposition: &Disposition) -> Option<String> {
    let response = Response::from_disposition(disposition)?;
    match serde_json::to_string(&response) {
        Ok(line) => Some(line),
        Err(e) => {
            log::error!("failed to serialize response: {e}");
            None
        }
    }
}
