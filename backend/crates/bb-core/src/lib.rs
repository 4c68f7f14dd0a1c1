pub mod commands;
pub mod error;
pub mod models;
pub mod parsing;

#[cfg(test)]
mod tests;

pub use commands::{COMMANDS, MessageCommand, find_command};
pub use error::{CoreError, Result};
pub use models::args::{Args, UNNAMED_ARG};
pub use models::game_mode::GameMode;
pub use models::instance_id::InstanceId;
pub use models::lifecycle_event::LifecycleEvent;
pub use models::request::{Request, RequestOpCode};
pub use models::server_state::ServerState;
pub use models::world::{UNKNOWN_MODE, World};
pub use parsing::arg_parser::{ArgParseError, parse_arg_string};
pub use parsing::request_parser::parse_request;
