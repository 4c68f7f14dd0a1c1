use crate::ServerState;

#[test]
fn test_server_state_as_str() {
    assert_eq!(ServerState::Idle.as_str(), "idle");
    assert_eq!(ServerState::Starting.as_str(), "starting");
    assert_eq!(ServerState::Running.as_str(), "running");
    assert_eq!(ServerState::Stopping.as_str(), "stopping");
    assert_eq!(ServerState::Crashed.as_str(), "crashed");
}

#[test]
fn test_server_state_default() {
    assert_eq!(ServerState::default(), ServerState::Idle);
}

#[test]
fn test_server_state_accepts_start() {
    assert!(ServerState::Idle.accepts_start());
    assert!(ServerState::Crashed.accepts_start());
    assert!(!ServerState::Starting.accepts_start());
    assert!(!ServerState::Running.accepts_start());
    assert!(!ServerState::Stopping.accepts_start());
}
