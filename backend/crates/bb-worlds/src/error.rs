use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldError {
    #[error("IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("World already exists: {name} {location}")]
    AlreadyExists {
        name: String,
        location: ErrorLocation,
    },

    #[error("Invalid world name: {name:?} {location}")]
    InvalidName {
        name: String,
        location: ErrorLocation,
    },

    #[error("World init for {name} failed: {reason} {location}")]
    InitFailed {
        name: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Key {key:?} not found in {path} {location}")]
    MissingKey {
        path: PathBuf,
        key: String,
        location: ErrorLocation,
    },
}

impl WorldError {
    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn init_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InitFailed {
            name: name.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_key(path: &Path, key: impl Into<String>) -> Self {
        Self::MissingKey {
            path: path.to_path_buf(),
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, WorldError>;
