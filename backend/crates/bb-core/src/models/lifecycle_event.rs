use crate::InstanceId;

/// Asynchronous notifications from background tasks back into the
/// lifecycle manager's loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The readiness poller saw the server's port bound
    Started { instance: InstanceId },
    /// The server process exited, for whatever reason
    Stopped {
        instance: InstanceId,
        exit_code: Option<i32>,
    },
    CreateWorldSuccess { name: String },
    CreateWorldFailure { name: String, reason: String },
}

impl LifecycleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Started { .. } => "started",
            Self::Stopped { .. } => "stopped",
            Self::CreateWorldSuccess { .. } => "create_world_success",
            Self::CreateWorldFailure { .. } => "create_world_failure",
        }
    }
}
