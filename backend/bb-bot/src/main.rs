use bb_bot::{
    BotError, CHANNEL_CAPACITY,
    app::build_manager,
    cli::Cli,
    logger,
    transport::{ConsoleTransport, write_responses},
};
use bb_config::Config;

use std::error::Error;

use clap::Parser;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    let root = match cli.root_dir {
        Some(dir) => dir,
        None => Config::root_dir()?,
    };

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, &config_dir.join(&config.logging.dir))?;

    info!("Starting bb-bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Deployment root: {}", root.display());
    config.log_summary();

    let manager = build_manager(&config, &root).await?;

    let (requests_tx, requests_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (responses_tx, responses_rx) = mpsc::channel(CHANNEL_CAPACITY);

    let manager_task = tokio::spawn(manager.run(requests_rx, responses_tx.clone()));
    let responder_task = tokio::spawn(write_responses(responses_rx, tokio::io::stdout()));

    let transport = ConsoleTransport::new(config.bot.command_prefix.clone());
    info!("BOT IS LISTENING");

    // Either ends the transport; dropping its request sender shuts the manager down
    tokio::select! {
        result = transport.read_requests(
            BufReader::new(tokio::io::stdin()),
            requests_tx,
            responses_tx,
        ) => {
            if let Err(e) = result {
                error!("Console transport stopped: {e}");
            }
            info!("Console closed, shutting down");
        }
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => error!("Failed to listen for SIGINT: {e}"),
        },
    }

    manager_task.await.map_err(BotError::manager_task)?;
    responder_task.await.map_err(BotError::manager_task)??;

    info!("bb-bot stopped");

    // A blocked stdin read would otherwise keep the runtime from shutting down
    std::process::exit(0)
}
