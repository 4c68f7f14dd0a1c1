use crate::{
    CoreError, MessageCommand, Request, Result as CoreErrorResult,
    commands::find_command,
    parsing::arg_parser::{ArgParseError, parse_arg_string},
};

use std::panic::Location;

use error_location::ErrorLocation;

/// Turns a chat message (bot prefix already removed) into a request.
///
/// Errors carry user-facing text; callers reply with `ERROR: {error}`.
#[track_caller]
pub fn parse_request(message: &str, commands: &[MessageCommand]) -> CoreErrorResult<Request> {
    let Some(mc) = find_command(message, commands) else {
        return Err(CoreError::UnknownCommand {
            command: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let arg_string = &message[mc.command.len()..];

    match parse_arg_string(arg_string, mc.flag_args, mc.allow_unnamed_arg) {
        Ok(args) => Ok(Request::new(mc.op, args)),
        Err(ArgParseError::InvalidFlag { found }) => Err(CoreError::FlagNotAllowed {
            flag: found,
            command: mc.command.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(ArgParseError::Malformed) => Err(CoreError::MalformedArguments {
            command: mc.command.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
