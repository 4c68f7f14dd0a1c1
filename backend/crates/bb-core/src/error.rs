use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid game mode: {value} {location}")]
    InvalidGameMode {
        value: String,
        location: ErrorLocation,
    },

    /// User-facing: the message is sent back to the caller as-is
    #[error("command \"{command}\" is not recognized. get it together")]
    UnknownCommand {
        command: String,
        location: ErrorLocation,
    },

    /// User-facing
    #[error("flag \"{flag}\" is not allowed for command \"{command}\"")]
    FlagNotAllowed {
        flag: String,
        command: String,
        location: ErrorLocation,
    },

    /// User-facing
    #[error("i have literally no idea what that means")]
    MalformedArguments {
        command: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
