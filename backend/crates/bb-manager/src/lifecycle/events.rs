//! Lifecycle event handlers.

use crate::{LifecycleManager, lifecycle::messages};

use bb_core::{InstanceId, ServerState};

use tracing::{info, warn};

impl LifecycleManager {
    pub(crate) fn on_started(&mut self, instance: InstanceId) -> Option<String> {
        match self.ctx.handle.as_mut() {
            Some(handle) if handle.instance == instance => {
                handle.running = true;
                self.ctx.state = ServerState::Running;
                Some(messages::SERVER_READY.to_string())
            }
            _ => {
                warn!("Ignoring started event from stale instance {instance}");
                None
            }
        }
    }

    pub(crate) fn on_stopped(
        &mut self,
        instance: InstanceId,
        exit_code: Option<i32>,
    ) -> Option<String> {
        match &self.ctx.handle {
            Some(handle) if handle.instance != instance => {
                warn!("Ignoring stopped event from stale instance {instance}");
                return None;
            }
            None if self.ctx.state != ServerState::Stopping => {
                warn!("Ignoring stopped event for instance {instance} with no server expected");
                return None;
            }
            _ => {}
        }

        info!("Server {instance} exited with code {exit_code:?}");
        self.ctx.handle = None;

        if self.ctx.state == ServerState::Stopping {
            self.ctx.state = ServerState::Idle;
            Some(messages::SERVER_STOPPED.to_string())
        } else {
            self.ctx.state = ServerState::Crashed;
            Some(messages::SERVER_CRASHED.to_string())
        }
    }

    pub(crate) fn on_world_created(&mut self, name: &str) -> String {
        self.ctx.pending_creates.remove(name);
        info!("World {name} created");
        messages::world_created(name)
    }

    pub(crate) fn on_world_create_failed(&mut self, name: &str, reason: &str) -> String {
        self.ctx.pending_creates.remove(name);
        warn!("Could not create world {name}: {reason}");
        messages::CREATE_FAILED.to_string()
    }
}
