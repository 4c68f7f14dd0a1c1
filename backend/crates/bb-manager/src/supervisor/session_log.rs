//! The append-only session log shared by every server run.

use crate::{ManagerError, ManagerResult};

use bb_core::Args;

use std::path::Path;

use chrono::{DateTime, Local};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

pub const DEFAULT_LOG_LIMIT: usize = 5;
pub const DEFAULT_LOG_OFFSET: usize = 0;

const LIMIT_FLAG: &str = "l";
const OFFSET_FLAG: &str = "o";

pub fn session_banner(started_on: DateTime<Local>) -> String {
    format!(
        "\n\n=== BEGIN SESSION {} ===\n\n\n",
        started_on.to_rfc3339()
    )
}

/// Opens the log for appending, creating it if needed, and writes the banner
/// for a new session.
pub async fn open_session_log(
    path: &Path,
    started_on: DateTime<Local>,
) -> ManagerResult<std::fs::File> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| ManagerError::log_file_open(path, e))?;

    file.write_all(session_banner(started_on).as_bytes())
        .await
        .map_err(|e| ManagerError::log_file_open(path, e))?;
    file.flush()
        .await
        .map_err(|e| ManagerError::log_file_open(path, e))?;

    Ok(file.into_std().await)
}

/// Which slice of the log to show: `limit` lines ending `offset` lines
/// before the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogWindow {
    pub limit: usize,
    pub offset: usize,
}

impl Default for LogWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LOG_LIMIT,
            offset: DEFAULT_LOG_OFFSET,
        }
    }
}

impl LogWindow {
    /// Reads `-l` and `-o`; missing, zero, negative or non-numeric values
    /// fall back to the defaults.
    pub fn from_args(args: &Args) -> Self {
        let defaults = Self::default();
        Self {
            limit: args.positive_usize(LIMIT_FLAG).unwrap_or(defaults.limit),
            offset: args.positive_usize(OFFSET_FLAG).unwrap_or(defaults.offset),
        }
    }
}

/// Last `limit` lines of `contents`, ending `offset` lines before the end,
/// joined with `\n`. Both ends clamp to the start of the text.
///
/// A trailing newline does not count as an extra empty line.
pub fn read_last_lines(contents: &str, limit: usize, offset: usize) -> String {
    let lines: Vec<&str> = contents.lines().collect();
    let end = lines.len().saturating_sub(offset);
    let start = end.saturating_sub(limit);
    lines[start..end].join("\n")
}

pub async fn tail_session_log(path: &Path, window: LogWindow) -> ManagerResult<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ManagerError::log_file_read(path, e))?;
    let contents = String::from_utf8_lossy(&bytes);

    Ok(read_last_lines(&contents, window.limit, window.offset))
}
