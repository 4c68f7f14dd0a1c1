use crate::Args;

/// Operations a remote operator can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestOpCode {
    /// Start an idle or crashed server on a world
    Start,
    /// Gracefully stop a running server
    Stop,
    /// Forcefully stop a running or starting server
    Kill,
    Status,
    /// Tail the session log
    Logs,
    /// Public address players connect to
    Address,
    Help,
    /// Create a new world
    Create,
    /// List existing worlds
    List,
}

impl RequestOpCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Kill => "kill",
            Self::Status => "status",
            Self::Logs => "logs",
            Self::Address => "address",
            Self::Help => "help",
            Self::Create => "create",
            Self::List => "list",
        }
    }
}

impl std::fmt::Display for RequestOpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parsed operator request, consumed once by the lifecycle manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub op: RequestOpCode,
    pub args: Args,
}

impl Request {
    pub fn new(op: RequestOpCode, args: Args) -> Self {
        Self { op, args }
    }

    /// Request without arguments
    pub fn bare(op: RequestOpCode) -> Self {
        Self::new(op, Args::new())
    }
}
