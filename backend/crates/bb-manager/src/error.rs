use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Failed to open session log at {path}: {source} {location}")]
    LogFileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read session log at {path}: {source} {location}")]
    LogFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to spawn {program}: {source} {location}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Server stdin is already closed {location}")]
    StdinClosed { location: ErrorLocation },

    #[error("Failed to write to server stdin: {source} {location}")]
    StdinWrite {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Server was already killed {location}")]
    AlreadyKilled { location: ErrorLocation },
}

impl ManagerError {
    #[track_caller]
    pub fn log_file_open(path: &Path, source: std::io::Error) -> Self {
        Self::LogFileOpen {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn log_file_read(path: &Path, source: std::io::Error) -> Self {
        Self::LogFileRead {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn process_spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::ProcessSpawn {
            program: program.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn stdin_closed() -> Self {
        Self::StdinClosed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn stdin_write(source: std::io::Error) -> Self {
        Self::StdinWrite {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_killed() -> Self {
        Self::AlreadyKilled {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ManagerResult<T> = StdResult<T, ManagerError>;
