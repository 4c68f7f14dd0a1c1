use crate::ManagerResult;

use bb_core::{InstanceId, LifecycleEvent};

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Starts game server processes.
///
/// Implementations must return without waiting for readiness. Afterwards they
/// report on `events`: at most one `Started` once the server accepts players,
/// and exactly one `Stopped` when the process exits, both tagged with
/// `instance`. No `Started` may follow a `kill()`.
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn spawn(
        &self,
        world: &str,
        instance: InstanceId,
        events: mpsc::Sender<LifecycleEvent>,
    ) -> ManagerResult<Box<dyn ProcessControl>>;
}

/// Control over one running server process.
#[async_trait]
pub trait ProcessControl: Send + Sync {
    /// Ask the server to shut down on its own terms.
    async fn stop(&mut self) -> ManagerResult<()>;

    /// Cancel readiness polling, then terminate the process outright.
    async fn kill(&mut self) -> ManagerResult<()>;
}
