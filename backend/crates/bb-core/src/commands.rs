//! Catalogue of chat commands the bot understands.

use crate::RequestOpCode;

/// How one chat command maps onto a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCommand {
    /// Command word following the bot prefix
    pub command: &'static str,
    /// Named flags the command accepts (`-flag=value`)
    pub flag_args: &'static [&'static str],
    /// Whether one leading positional value is accepted
    pub allow_unnamed_arg: bool,
    pub op: RequestOpCode,
    /// One line shown by the help command
    pub help_text: &'static str,
}

pub static COMMANDS: &[MessageCommand] = &[
    MessageCommand {
        command: "start",
        flag_args: &[],
        allow_unnamed_arg: true,
        op: RequestOpCode::Start,
        help_text: "start _world-name_ : start the server on the specified world. it won't immediately be available - the bot will message you when it's ready",
    },
    MessageCommand {
        command: "stop",
        flag_args: &[],
        allow_unnamed_arg: false,
        op: RequestOpCode::Stop,
        help_text: "stop : safely stop a running server",
    },
    MessageCommand {
        command: "kill",
        flag_args: &[],
        allow_unnamed_arg: false,
        op: RequestOpCode::Kill,
        help_text: "kill : unsafely stop a running or starting server (be careful, this could corrupt the minecraft world)",
    },
    MessageCommand {
        command: "status",
        flag_args: &[],
        allow_unnamed_arg: false,
        op: RequestOpCode::Status,
        help_text: "status : report on the status of the server",
    },
    MessageCommand {
        command: "address",
        flag_args: &[],
        allow_unnamed_arg: false,
        op: RequestOpCode::Address,
        help_text: "address : get the public dns address of the server (what you'll use to connect to it)",
    },
    MessageCommand {
        command: "help",
        flag_args: &[],
        allow_unnamed_arg: false,
        op: RequestOpCode::Help,
        help_text: "help : list available Commands",
    },
    MessageCommand {
        command: "logs",
        flag_args: &["l", "o"],
        allow_unnamed_arg: false,
        op: RequestOpCode::Logs,
        help_text: "logs : print out a list of the most recent logs. control with flags _l_ (limit) and _o_ (offset). i.e. \"!bb logs -l=10 -o=15\"",
    },
    MessageCommand {
        command: "create",
        flag_args: &["name", "mode"],
        allow_unnamed_arg: false,
        op: RequestOpCode::Create,
        help_text: "create : create a new world. required params: _name_ and _mode_. i.e. \"!bb create -name=my-new-world -mode=creative\"",
    },
    MessageCommand {
        command: "list",
        flag_args: &[],
        allow_unnamed_arg: false,
        op: RequestOpCode::List,
        help_text: "list : list the existing worlds",
    },
];

/// Finds the command a message invokes: the message is the command word
/// alone or the command word followed by a space.
pub fn find_command<'a>(
    message: &str,
    commands: &'a [MessageCommand],
) -> Option<&'a MessageCommand> {
    commands.iter().find(|mc| {
        message == mc.command
            || message
                .strip_prefix(mc.command)
                .is_some_and(|rest| rest.starts_with(' '))
    })
}
