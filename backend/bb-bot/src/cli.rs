use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bb-bot")]
#[command(about = "Chat bot that starts, stops and reports on a game server")]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml and the bot's own logs (default: ./.bb)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Deployment root holding the worlds directory, session log and server jar
    /// (default: current directory)
    #[arg(long)]
    pub root_dir: Option<PathBuf>,
}
