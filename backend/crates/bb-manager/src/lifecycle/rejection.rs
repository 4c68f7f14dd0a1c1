use thiserror::Error;

/// Why a request was refused. The `Display` text goes to the user verbatim
/// after an `ERROR: ` prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("server is already running; you cannot start it")]
    AlreadyRunning,

    #[error("server is shutting down; wait for it to stop before restarting it")]
    ShuttingDown,

    #[error(
        "world name is missing. please supply as an unnamed option after the command. i.e. \"!bb start _my-world_\""
    )]
    MissingWorld,

    #[error("requested world is not valid. please supply an existing world or create a new one")]
    InvalidWorld,

    #[error("requested world is still being created. wait for the create message and try again")]
    WorldNotReady,

    #[error("could not start the server. check the bot logs")]
    SpawnFailed,

    #[error("server is not running; it cannot be stopped")]
    NotRunning,

    #[error("could not tell the server to stop. it is still running")]
    StopFailed,

    #[error("no server to kill")]
    NothingToKill,

    #[error("cannot get logs - server is running; stop and try again to see logs")]
    ServerBusy,

    #[error("could not read the logs")]
    LogsUnavailable,

    #[error("cannot create server while running. stop server and try again")]
    IllegalWhileRunning,

    #[error(
        "world name is missing. please supply with the \"name\" option. e.g. -name=_my-new-world_"
    )]
    MissingName,

    #[error(
        "world name is not valid. use only letters, numbers, \"-\" and \"_\" (64 characters at most)"
    )]
    InvalidWorldName,

    #[error("world \"{name}\" already exists. pick a new name")]
    DuplicateWorld { name: String },

    #[error("could not check the existing worlds. try again later")]
    WorldsUnavailable,

    #[error("mode is missing. please supply with the \"mode\" option. e.g. -mode=creative")]
    MissingMode,

    #[error("mode is not valid. options are \"creative\" and \"survival\"")]
    InvalidMode,
}
