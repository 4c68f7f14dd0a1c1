//! Spawns the game server and watches it until it exits.

use crate::{
    Launcher, ManagerError, ManagerResult, ProcessControl, ReadinessProbe, ServerProcess,
    supervisor::{readiness::poll_until_ready, session_log::open_session_log},
};

use bb_core::{InstanceId, LifecycleEvent};

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use tokio::process::{Child, Command};
use tokio::sync::{mpsc, oneshot};
use tokio::task::AbortHandle;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct SupervisorSettings {
    /// Server executable
    pub program: String,
    /// Arguments, fully resolved
    pub args: Vec<String>,
    /// Each world runs with `worlds_dir/<world>` as working directory
    pub worlds_dir: PathBuf,
    /// Session log receiving the server's stdout and stderr
    pub log_file: PathBuf,
    /// Line written to stdin for a graceful stop
    pub stop_directive: String,
    pub poll_interval: Duration,
}

/// Production [`Launcher`]: one OS process per start, output appended to
/// the session log.
pub struct ProcessSupervisor {
    settings: SupervisorSettings,
    probe: Arc<dyn ReadinessProbe>,
}

impl ProcessSupervisor {
    pub fn new(settings: SupervisorSettings, probe: Arc<dyn ReadinessProbe>) -> Self {
        Self { settings, probe }
    }
}

#[async_trait]
impl Launcher for ProcessSupervisor {
    async fn spawn(
        &self,
        world: &str,
        instance: InstanceId,
        events: mpsc::Sender<LifecycleEvent>,
    ) -> ManagerResult<Box<dyn ProcessControl>> {
        let settings = &self.settings;
        let log_file = open_session_log(&settings.log_file, Local::now()).await?;
        let stderr_file = log_file
            .try_clone()
            .map_err(|e| ManagerError::log_file_open(&settings.log_file, e))?;

        let world_dir = settings.worlds_dir.join(world);
        info!(
            "Spawning {} for world {} in {}",
            settings.program,
            world,
            world_dir.display()
        );

        let mut cmd = Command::new(&settings.program);
        cmd.args(&settings.args)
            .current_dir(&world_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::from(log_file))
            .stderr(Stdio::from(stderr_file));

        let mut child = cmd
            .spawn()
            .map_err(|e| ManagerError::process_spawn(&settings.program, e))?;
        // Releases our copies of the log file handles
        drop(cmd);

        info!("Server {} started with PID {:?}", instance, child.id());

        let stdin = child.stdin.take();

        let poller = tokio::spawn(poll_until_ready(
            self.probe.clone(),
            settings.poll_interval,
            instance,
            events.clone(),
        ));

        let (kill_tx, kill_rx) = oneshot::channel();
        tokio::spawn(watch_exit(
            child,
            kill_rx,
            poller.abort_handle(),
            instance,
            events,
        ));

        Ok(Box::new(ServerProcess::new(
            stdin,
            settings.stop_directive.clone(),
            kill_tx,
            poller,
        )))
    }
}

/// Waits for the process to exit, killing it first if asked to, then stops
/// the readiness poller and reports `Stopped`.
async fn watch_exit(
    mut child: Child,
    kill_rx: oneshot::Receiver<()>,
    poller: AbortHandle,
    instance: InstanceId,
    events: mpsc::Sender<LifecycleEvent>,
) {
    let status = tokio::select! {
        status = child.wait() => status,
        Ok(()) = kill_rx => {
            warn!("Killing server {instance}");
            if let Err(e) = child.start_kill() {
                error!("Failed to kill server {instance}: {e}");
            }
            child.wait().await
        }
    };

    poller.abort();

    let exit_code = match status {
        Ok(status) => {
            info!("Server {instance} exited: {status}");
            status.code()
        }
        Err(e) => {
            error!("Failed waiting on server {instance}: {e}");
            None
        }
    };

    let _ = events
        .send(LifecycleEvent::Stopped {
            instance,
            exit_code,
        })
        .await;
}
