use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::path::PathBuf;
use std::str::FromStr;

use crate::eval::Disposition;

/// Env var overriding the log level (`error` … `trace`, or `off`).
pub const LOG_LEVEL_VAR: &str = "PYDEV_HOOKS_LOG";

/// `~/.local/share/pydev-hooks/hooks.log`
pub fn log_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".local/share/pydev-hooks/hooks.log"))
}

/// Install a file logger. Best-effort: if the log file can't be opened the
/// hook runs without one. Never logs to stdout/stderr, which carry the protocol.
pub fn init() {
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|v| LevelFilter::from_str(&v).ok())
        .unwrap_or(LevelFilter::Info);
    if level == LevelFilter::Off {
        return;
    }
    let Some(path) = log_path() else {
        return;
    };
    if let Some(dir) = path.parent()
        && std::fs::create_dir_all(dir).is_err()
    {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(level, config, file);
}

/// Record one decision as `<decision>\t<event>\t<reason>` on a single line.
pub fn log_decision(event: &str, disposition: &Disposition) {
    let event: String = oneline(event).chars().take(200).collect();
    let reason = match disposition {
        Disposition::Block { reason, .. } => oneline(reason),
        _ => String::new(),
    };
    log::info!("{}\t{event}\t{reason}", disposition.as_str());
}

fn oneline(text: &str) -> String {
    text.trim().replace('\n', "; ")
}
