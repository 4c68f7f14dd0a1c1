//! Wires configuration into the world store, supervisor and manager.

use crate::BotErrorResult;

use bb_config::Config;
use bb_manager::{
    LifecycleManager, ManagerSettings, PortProbe, ProcessSupervisor, SupervisorSettings,
};
use bb_worlds::WorldStore;

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

/// Builds a manager for the deployment under `root`, creating the worlds
/// directory if it is missing.
pub async fn build_manager(config: &Config, root: &Path) -> BotErrorResult<LifecycleManager> {
    let worlds_path = config.worlds_path(root);
    let log_file = config.log_file_path(root);
    let jar_path = config.jar_path(root);

    let worlds = WorldStore::new(
        &worlds_path,
        config.game.program.clone(),
        config.game.init_launch_args(&jar_path),
    );
    worlds.ensure_root().await?;
    info!("Worlds directory: {}", worlds_path.display());

    let probe = PortProbe::new(
        config.readiness.host.clone(),
        config.readiness.port,
        config.readiness.connect_timeout(),
    );

    let supervisor = ProcessSupervisor::new(
        SupervisorSettings {
            program: config.game.program.clone(),
            args: config.game.launch_args(&jar_path),
            worlds_dir: worlds_path,
            log_file: log_file.clone(),
            stop_directive: config.game.stop_directive.clone(),
            poll_interval: config.readiness.poll_interval(),
        },
        Arc::new(probe),
    );

    let public_address = config.public_address().unwrap_or_default().to_string();
    if public_address.is_empty() {
        warn!("No public address configured; the address command will report an empty one");
    }

    Ok(LifecycleManager::new(
        Arc::new(supervisor),
        worlds,
        ManagerSettings {
            log_file,
            public_address,
            shutdown_timeout: config.bot.shutdown_timeout(),
        },
    ))
}
