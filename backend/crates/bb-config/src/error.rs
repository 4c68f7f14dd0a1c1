use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cannot determine working directory: {source} {location}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a game launch error
    #[track_caller]
    pub fn game<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Game",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a readiness polling error
    #[track_caller]
    pub fn readiness<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Readiness",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a storage error
    #[track_caller]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Storage",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a bot error
    #[track_caller]
    pub fn bot<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Bot",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn working_dir(source: std::io::Error) -> Self {
        ConfigError::WorkingDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
