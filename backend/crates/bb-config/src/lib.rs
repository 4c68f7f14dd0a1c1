mod bot_config;
mod config;
mod error;
mod game_config;
mod log_level;
mod logging_config;
mod readiness_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use bot_config::BotConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use game_config::{GameConfig, JAR_PLACEHOLDER};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use readiness_config::ReadinessConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_NAME: &str = ".bb";
const CONFIG_FILENAME: &str = "config.toml";

// Game server launch
const DEFAULT_GAME_PROGRAM: &str = "java";
const DEFAULT_JAR: &str = "server.jar";
const DEFAULT_STOP_DIRECTIVE: &str = "stop";

// Readiness polling
const DEFAULT_READINESS_HOST: &str = "127.0.0.1";
const DEFAULT_READINESS_PORT: u16 = 25565;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
const MIN_POLL_INTERVAL_SECS: u64 = 1;
const MAX_POLL_INTERVAL_SECS: u64 = 300;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 1000;

// Storage
const DEFAULT_WORLDS_DIR: &str = "bb-worlds";
const DEFAULT_LOG_FILE: &str = "bb-logs";

// Bot
const DEFAULT_COMMAND_PREFIX: &str = "!bb ";
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_RETENTION: usize = 7;
