use crate::ProcessControl;

use bb_core::{InstanceId, ServerState};

use std::collections::HashSet;

use chrono::{DateTime, Local};

/// Everything the manager loop owns. Nothing else reads or writes it.
#[derive(Default)]
pub struct LifecycleContext {
    pub state: ServerState,
    /// Present from a successful start until the process is known to be gone
    pub handle: Option<ServerHandle>,
    /// Worlds whose create has been accepted but not yet reported back
    pub pending_creates: HashSet<String>,
}

/// The live server instance.
pub struct ServerHandle {
    pub instance: InstanceId,
    pub world_name: String,
    pub started_on: DateTime<Local>,
    /// Set once readiness polling succeeded
    pub running: bool,
    pub process: Box<dyn ProcessControl>,
}

impl ServerHandle {
    pub fn new(
        instance: InstanceId,
        world_name: impl Into<String>,
        process: Box<dyn ProcessControl>,
    ) -> Self {
        Self {
            instance,
            world_name: world_name.into(),
            started_on: Local::now(),
            running: false,
            process,
        }
    }
}

impl std::fmt::Debug for ServerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerHandle")
            .field("instance", &self.instance)
            .field("world_name", &self.world_name)
            .field("started_on", &self.started_on)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
