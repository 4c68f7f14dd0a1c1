//! Game server supervision: the lifecycle state machine, the subprocess
//! supervisor and the session log.

pub mod error;
pub mod lifecycle;
pub mod supervisor;

#[cfg(test)]
mod tests;

pub use error::{ManagerError, ManagerResult};
pub use lifecycle::context::{LifecycleContext, ServerHandle};
pub use lifecycle::manager::{LifecycleManager, ManagerSettings};
pub use lifecycle::rejection::Rejection;
pub use supervisor::launcher::{Launcher, ProcessControl};
pub use supervisor::process_supervisor::{ProcessSupervisor, SupervisorSettings};
pub use supervisor::readiness::{PortProbe, ReadinessProbe};
pub use supervisor::server_process::ServerProcess;
pub use supervisor::session_log::{LogWindow, read_last_lines};

/// Capacity of the queue carrying lifecycle events into the manager loop
pub const EVENT_CHANNEL_CAPACITY: usize = 32;
