use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, DEFAULT_LOG_RETENTION, LogLevel};

use serde::Deserialize;

/// Logging for the bot process itself (not the game server's session log).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for rotated bot logs, relative to the config directory
    pub dir: String,
    /// Number of daily log files to keep
    pub retention: usize,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            retention: DEFAULT_LOG_RETENTION,
            colored: true,
        }
    }
}
