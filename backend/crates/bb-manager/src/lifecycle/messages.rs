//! Response texts sent back to chat.

use bb_core::{COMMANDS, World};

use chrono::{DateTime, Local};

pub const ERROR_PREFIX: &str = "ERROR: ";

pub const START_ACK: &str = "SERVER IS STARTING. WAIT FOR START MESSAGE TO JOIN.";
pub const STOP_ACK: &str = "STOPPING SERVER";
pub const KILL_ACK: &str = "KILLING SERVER";
pub const CREATE_ACK: &str = "CREATING WORLD... WAIT FOR CONFIRMATION RESPONSE BEFORE STARTING";

pub const STATUS_STARTING: &str = "SERVER IS STARTING UP. BE PATIENT. I WILL NOTIFY WHEN ITS READY.";
pub const STATUS_IDLE: &str = "SERVER IS NOT RUNNING. TELL ME TO START IT. COME ON. I WANT YOU TO DO IT.";
pub const STATUS_CRASHED: &str = "SHIT. SERVER HAS CRASHED. I HAVE NO ANSWERS. ONLY PAIN.";
pub const STATUS_STOPPING: &str =
    "SERVER IS SHUTTING DOWN. IT IS A FAR BETTER REST THAT I GO TO THAN I HAVE EVER KNOWN.";

pub const NO_LOGS: &str = "NO LOGS TO SHOW";

pub const LIST_HEADER: &str = "AVAILABLE WORLDS:\n";
pub const LIST_FOOTER: &str =
    "\n\nStart a world with the \"start\" command i.e. \"!bb start _my-world_\"";
pub const LIST_EMPTY: &str = "NO WORLDS YET. MAKE ONE WITH \"!bb create -name=_my-new-world_ -mode=creative\"";
pub const LIST_FAILED: &str = "Uh oh. I... uh... could not list the worlds. Doesn't really sound good. But what do I know";

pub const SERVER_READY: &str = "SERVER IS READY. BLOC AWAY MY BOIS";
pub const SERVER_STOPPED: &str = "SERVER HAS STOPPED.";
pub const SERVER_CRASHED: &str = "SHIT. SERVER HAS CRASHED";
pub const CREATE_FAILED: &str = "ERROR: COULD NOT CREATE WORLD";

const HELP_HEADER: &str = "Issue a command by messaging the bot with \"!bb <your command> <options>\"
e.g. if you wanted to start the server with the hyperion world: \"!bb start hyperion\"

COMMANDS";

pub fn status_running(world: &str, started_on: DateTime<Local>) -> String {
    format!(
        "SERVER IS RUNNING ON WORLD _{world}_. BLOC AWAY, MY BOIS.\nserver started on {}",
        started_on.format("%Y-%m-%d %H:%M:%S %:z")
    )
}

pub fn address(address: &str) -> String {
    format!("SERVER LISTENING FROM {address}")
}

pub fn help() -> String {
    COMMANDS.iter().fold(HELP_HEADER.to_string(), |mut text, mc| {
        text.push_str("\n- ");
        text.push_str(mc.help_text);
        text
    })
}

pub fn world_list(worlds: &[World]) -> String {
    if worlds.is_empty() {
        return LIST_EMPTY.to_string();
    }

    let mut text = LIST_HEADER.to_string();
    for world in worlds {
        text.push_str(&format!("\n{} ({})", world.name, world.mode));
    }
    text.push_str(LIST_FOOTER);
    text
}

pub fn world_created(name: &str) -> String {
    format!("WORLD \"{name}\" CREATED. START IF YOU DARE.")
}
