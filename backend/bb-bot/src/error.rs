use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Config error: {0}")]
    Config(#[from] bb_config::ConfigError),

    #[error("World store error: {0}")]
    Worlds(#[from] bb_worlds::WorldError),

    #[error("Failed to create log directory {path}: {source} {location}")]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Console transport failed: {source} {location}")]
    Console {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Lifecycle manager task failed: {message} {location}")]
    ManagerTask {
        message: String,
        location: ErrorLocation,
    },
}

impl BotError {
    #[track_caller]
    pub fn log_dir(path: &Path, source: std::io::Error) -> Self {
        Self::LogDir {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl std::fmt::Display) -> Self {
        Self::Logger {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn console(source: std::io::Error) -> Self {
        Self::Console {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn manager_task(message: impl std::fmt::Display) -> Self {
        Self::ManagerTask {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
