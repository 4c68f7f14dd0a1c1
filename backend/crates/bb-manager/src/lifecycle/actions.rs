//! Request handlers. Each returns the response text or a rejection and
//! leaves the context consistent either way.

use crate::{
    LifecycleManager, Rejection, ServerHandle,
    lifecycle::messages,
    supervisor::session_log::{LogWindow, tail_session_log},
};

use bb_core::{Args, GameMode, InstanceId, LifecycleEvent, ServerState, World};

use tracing::{error, info, warn};

type ActionResult = Result<String, Rejection>;

const NAME_FLAG: &str = "name";
const MODE_FLAG: &str = "mode";

impl LifecycleManager {
    pub(crate) async fn start(&mut self, args: &Args) -> ActionResult {
        match self.ctx.state {
            ServerState::Running | ServerState::Starting => return Err(Rejection::AlreadyRunning),
            ServerState::Stopping => return Err(Rejection::ShuttingDown),
            ServerState::Idle | ServerState::Crashed => {}
        }

        let world = args.unnamed().ok_or(Rejection::MissingWorld)?;
        if self.ctx.pending_creates.contains(world) {
            return Err(Rejection::WorldNotReady);
        }

        let known = match self.worlds.exists(world).await {
            Ok(known) => known,
            Err(e) => {
                warn!("Could not list worlds: {e}");
                false
            }
        };
        if !known {
            return Err(Rejection::InvalidWorld);
        }

        let previous = self.ctx.state;
        self.ctx.state = ServerState::Starting;
        let instance = InstanceId::new();

        match self
            .launcher
            .spawn(world, instance, self.events_tx.clone())
            .await
        {
            Ok(process) => {
                info!("Starting world {world} as instance {instance}");
                self.ctx.handle = Some(ServerHandle::new(instance, world, process));
                Ok(messages::START_ACK.to_string())
            }
            Err(e) => {
                error!("Failed to start world {world}: {e}");
                self.ctx.state = previous;
                Err(Rejection::SpawnFailed)
            }
        }
    }

    pub(crate) async fn stop(&mut self) -> ActionResult {
        if self.ctx.state != ServerState::Running {
            return Err(Rejection::NotRunning);
        }
        let Some(handle) = self.ctx.handle.as_mut() else {
            return Err(Rejection::NotRunning);
        };

        self.ctx.state = ServerState::Stopping;

        if let Err(e) = handle.process.stop().await {
            error!("Failed to stop server {}: {e}", handle.instance);
            self.ctx.state = ServerState::Running;
            return Err(Rejection::StopFailed);
        }

        Ok(messages::STOP_ACK.to_string())
    }

    pub(crate) async fn kill(&mut self) -> ActionResult {
        let Some(mut handle) = self.ctx.handle.take() else {
            return Err(Rejection::NothingToKill);
        };

        self.ctx.state = ServerState::Stopping;

        if let Err(e) = handle.process.kill().await {
            error!("Failed to kill server {}: {e}", handle.instance);
        }

        Ok(messages::KILL_ACK.to_string())
    }

    pub(crate) fn status(&self) -> String {
        match self.ctx.state {
            ServerState::Starting => messages::STATUS_STARTING.to_string(),
            ServerState::Idle => messages::STATUS_IDLE.to_string(),
            ServerState::Crashed => messages::STATUS_CRASHED.to_string(),
            ServerState::Stopping => messages::STATUS_STOPPING.to_string(),
            ServerState::Running => match &self.ctx.handle {
                Some(handle) => messages::status_running(&handle.world_name, handle.started_on),
                None => messages::STATUS_IDLE.to_string(),
            },
        }
    }

    pub(crate) async fn logs(&self, args: &Args) -> ActionResult {
        if self.ctx.state == ServerState::Running && self.ctx.handle.is_some() {
            return Err(Rejection::ServerBusy);
        }

        let window = LogWindow::from_args(args);
        let text = tail_session_log(&self.settings.log_file, window)
            .await
            .map_err(|e| {
                warn!("Could not read session log: {e}");
                Rejection::LogsUnavailable
            })?;

        if text.trim().is_empty() {
            return Ok(messages::NO_LOGS.to_string());
        }
        Ok(text)
    }

    pub(crate) fn address(&self) -> String {
        messages::address(&self.settings.public_address)
    }

    pub(crate) async fn create(&mut self, args: &Args) -> ActionResult {
        if !self.ctx.state.accepts_start() {
            return Err(Rejection::IllegalWhileRunning);
        }

        let name = args
            .get(NAME_FLAG)
            .filter(|name| !name.is_empty())
            .ok_or(Rejection::MissingName)?;
        if !World::is_valid_name(name) {
            return Err(Rejection::InvalidWorldName);
        }
        if self.ctx.pending_creates.contains(name) {
            return Err(Rejection::DuplicateWorld {
                name: name.to_string(),
            });
        }

        match self.worlds.exists(name).await {
            Ok(true) => {
                return Err(Rejection::DuplicateWorld {
                    name: name.to_string(),
                });
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Could not list worlds: {e}");
                return Err(Rejection::WorldsUnavailable);
            }
        }

        let mode = args.get(MODE_FLAG).ok_or(Rejection::MissingMode)?;
        let mode: GameMode = mode.parse().map_err(|_| Rejection::InvalidMode)?;

        let worlds = self.worlds.clone();
        let events = self.events_tx.clone();
        let name = name.to_string();
        self.ctx.pending_creates.insert(name.clone());

        tokio::spawn(async move {
            let event = match worlds.create(&name, mode).await {
                Ok(_) => LifecycleEvent::CreateWorldSuccess { name },
                Err(e) => LifecycleEvent::CreateWorldFailure {
                    name,
                    reason: e.to_string(),
                },
            };
            let _ = events.send(event).await;
        });

        Ok(messages::CREATE_ACK.to_string())
    }

    pub(crate) async fn list(&self) -> String {
        match self.worlds.list().await {
            Ok(worlds) => messages::world_list(&worlds),
            Err(e) => {
                error!("Could not list worlds: {e}");
                messages::LIST_FAILED.to_string()
            }
        }
    }
}
