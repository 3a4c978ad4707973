//! Error types for the fallible edges of a hook invocation.
//!
//! Nothing here ever escapes to the host: callers match on these values and
//! substitute defaults (configuration) or treat the tool as silent (execution).

use std::path::PathBuf;

/// Failure to read or parse one configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failure to run an external tool at all (as opposed to the tool reporting
/// diagnostics through a non-zero exit).
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
