/// Lifecycle state of the single supervised game server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServerState {
    /// No server process; a start is accepted
    #[default]
    Idle,
    /// Process spawned, waiting for the readiness poller
    Starting,
    /// Port is bound and players can join
    Running,
    /// A stop or kill was issued; waiting for the process to exit
    Stopping,
    /// The last process exited without being asked to; a start is accepted
    Crashed,
}

impl ServerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Crashed => "crashed",
        }
    }

    /// Idle and Crashed are the only states a new server may start from.
    pub fn accepts_start(&self) -> bool {
        matches!(self, Self::Idle | Self::Crashed)
    }
}

impl std::fmt::Display for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
