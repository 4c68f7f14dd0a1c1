#![cfg(unix)]

mod common;

use common::{CRASHING_SERVER, Deployment, OBEDIENT_SERVER, RESPONSE_TIMEOUT, STUBBORN_SERVER};

use bb_core::{InstanceId, LifecycleEvent, ServerState};
use bb_manager::{Launcher, ManagerError};

use std::time::Duration;

use googletest::prelude::*;
use tokio::sync::mpsc;

async fn next_event(events: &mut mpsc::Receiver<LifecycleEvent>) -> Option<LifecycleEvent> {
    tokio::time::timeout(RESPONSE_TIMEOUT, events.recv())
        .await
        .expect("timed out waiting for an event")
}

// =========================================================================
// Process Supervisor
// =========================================================================

#[tokio::test]
async fn given_ready_server_when_stopped_then_started_precedes_single_stopped() {
    // Given
    let deployment = Deployment::new();
    deployment.probe.set_ready();
    let supervisor = deployment.supervisor(OBEDIENT_SERVER);
    let (events_tx, mut events_rx) = mpsc::channel(8);
    let instance = InstanceId::new();

    // When
    let mut process = supervisor
        .spawn("hyperion", instance, events_tx)
        .await
        .unwrap();
    let first = next_event(&mut events_rx).await;
    process.stop().await.unwrap();
    let second = next_event(&mut events_rx).await;
    let end = next_event(&mut events_rx).await;

    // Then
    assert_eq!(first, Some(LifecycleEvent::Started { instance }));
    assert_eq!(
        second,
        Some(LifecycleEvent::Stopped {
            instance,
            exit_code: Some(0)
        })
    );
    assert_eq!(end, None);
}

#[tokio::test]
async fn given_server_when_spawned_then_runs_in_world_dir_and_logs_after_banner() {
    // Given
    let deployment = Deployment::new();
    let supervisor = deployment.supervisor("pwd; echo oops >&2");
    let (events_tx, mut events_rx) = mpsc::channel(8);

    // When
    let _process = supervisor
        .spawn("hyperion", InstanceId::new(), events_tx)
        .await
        .unwrap();
    let stopped = next_event(&mut events_rx).await;

    // Then
    assert!(matches!(
        stopped,
        Some(LifecycleEvent::Stopped {
            exit_code: Some(0),
            ..
        })
    ));
    let log = std::fs::read_to_string(deployment.log_file()).unwrap();
    let banner_at = log.find("=== BEGIN SESSION ").unwrap();
    let cwd_at = log.find("hyperion").unwrap();
    assert!(banner_at < cwd_at);
    assert_that!(log.as_str(), contains_substring("oops"));
}

#[tokio::test]
async fn given_two_sessions_when_run_then_log_appended() {
    // Given
    let deployment = Deployment::new();
    let supervisor = deployment.supervisor("echo session");

    // When
    for _ in 0..2 {
        let (events_tx, mut events_rx) = mpsc::channel(8);
        let _process = supervisor
            .spawn("hyperion", InstanceId::new(), events_tx)
            .await
            .unwrap();
        next_event(&mut events_rx).await;
    }

    // Then
    let log = std::fs::read_to_string(deployment.log_file()).unwrap();
    assert_eq!(log.matches("=== BEGIN SESSION ").count(), 2);
    assert_eq!(log.matches("session\n").count(), 2);
}

#[tokio::test]
async fn given_unready_server_when_killed_then_only_stopped_follows() {
    // Given
    let deployment = Deployment::new();
    let supervisor = deployment.supervisor(STUBBORN_SERVER);
    let (events_tx, mut events_rx) = mpsc::channel(8);
    let instance = InstanceId::new();
    let mut process = supervisor
        .spawn("hyperion", instance, events_tx)
        .await
        .unwrap();

    // When
    process.kill().await.unwrap();
    deployment.probe.set_ready();
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Then
    let stopped = next_event(&mut events_rx).await;
    assert!(matches!(
        stopped,
        Some(LifecycleEvent::Stopped { instance: i, exit_code: None }) if i == instance
    ));
    assert_eq!(next_event(&mut events_rx).await, None);
}

#[tokio::test]
async fn given_killed_process_when_killed_again_then_error() {
    // Given
    let deployment = Deployment::new();
    let supervisor = deployment.supervisor(STUBBORN_SERVER);
    let (events_tx, _events_rx) = mpsc::channel(8);
    let mut process = supervisor
        .spawn("hyperion", InstanceId::new(), events_tx)
        .await
        .unwrap();
    process.kill().await.unwrap();

    // When
    let result = process.kill().await;

    // Then
    assert!(matches!(result, Err(ManagerError::AlreadyKilled { .. })));
}

#[tokio::test]
async fn given_stopped_once_when_stopped_again_then_stdin_closed() {
    // Given
    let deployment = Deployment::new();
    let supervisor = deployment.supervisor(STUBBORN_SERVER);
    let (events_tx, _events_rx) = mpsc::channel(8);
    let mut process = supervisor
        .spawn("hyperion", InstanceId::new(), events_tx)
        .await
        .unwrap();
    process.stop().await.unwrap();

    // When
    let result = process.stop().await;

    // Then
    assert!(matches!(result, Err(ManagerError::StdinClosed { .. })));
    process.kill().await.unwrap();
}

#[tokio::test]
async fn given_missing_world_dir_when_spawned_then_spawn_error() {
    // Given
    let deployment = Deployment::new();
    let supervisor = deployment.supervisor(OBEDIENT_SERVER);
    let (events_tx, _events_rx) = mpsc::channel(8);

    // When
    let result = supervisor
        .spawn("atlantis", InstanceId::new(), events_tx)
        .await;

    // Then
    assert!(matches!(result, Err(ManagerError::ProcessSpawn { .. })));
}

// =========================================================================
// Lifecycle over real processes
// =========================================================================

#[tokio::test]
async fn given_starting_server_when_killed_then_stopped_and_never_ready() {
    // Given
    let deployment = Deployment::new();
    let mut bot = deployment.launch(STUBBORN_SERVER);
    bot.ask("start hyperion").await;

    // When
    let kill = bot.ask("kill").await;
    deployment.probe.set_ready();
    let after_kill = bot.next().await;
    let status = bot.ask("status").await;

    // Then
    assert_that!(kill.as_str(), eq("KILLING SERVER"));
    assert_that!(after_kill.as_str(), eq("SERVER HAS STOPPED."));
    assert_that!(status.as_str(), starts_with("SERVER IS NOT RUNNING."));
}

#[tokio::test]
async fn given_server_exits_on_its_own_when_starting_then_crashed() {
    // Given
    let deployment = Deployment::new();
    let mut bot = deployment.launch(CRASHING_SERVER);

    // When
    bot.ask("start hyperion").await;
    let crashed = bot.next().await;
    let status = bot.ask("status").await;

    // Then
    assert_that!(crashed.as_str(), eq("SHIT. SERVER HAS CRASHED"));
    assert_that!(
        status.as_str(),
        eq("SHIT. SERVER HAS CRASHED. I HAVE NO ANSWERS. ONLY PAIN.")
    );
}

#[tokio::test]
async fn given_running_server_when_requests_close_then_stopped_gracefully() {
    // Given
    let deployment = Deployment::new();
    deployment.probe.set_ready();
    let mut bot = deployment.launch(OBEDIENT_SERVER);
    bot.ask("start hyperion").await;
    bot.next().await;

    // When
    let rest = bot.hang_up().await;

    // Then
    assert_eq!(
        rest,
        vec!["STOPPING SERVER".to_string(), "SERVER HAS STOPPED.".to_string()]
    );
}

#[tokio::test]
async fn given_stubborn_server_when_requests_close_then_killed_after_timeout() {
    // Given
    let mut deployment = Deployment::new();
    deployment.shutdown_timeout = Duration::from_millis(300);
    deployment.probe.set_ready();
    let mut bot = deployment.launch(STUBBORN_SERVER);
    bot.ask("start hyperion").await;
    bot.next().await;

    // When
    let rest = bot.hang_up().await;

    // Then
    assert_eq!(
        rest,
        vec![
            "STOPPING SERVER".to_string(),
            "KILLING SERVER".to_string(),
            "SERVER HAS STOPPED.".to_string(),
        ]
    );
}

#[tokio::test]
async fn given_manager_when_started_directly_then_state_tracks_events() {
    // Given
    let deployment = Deployment::new();
    let mut manager = deployment.manager(OBEDIENT_SERVER);

    // When
    manager
        .handle_request(bb_core::parse_request("start hyperion", bb_core::COMMANDS).unwrap())
        .await;
    deployment.probe.set_ready();
    let event = manager.next_event().await.unwrap();
    manager.handle_event(event).await;

    // Then
    assert_that!(manager.state(), eq(ServerState::Running));
    manager
        .handle_request(bb_core::parse_request("kill", bb_core::COMMANDS).unwrap())
        .await;
    let event = manager.next_event().await.unwrap();
    manager.handle_event(event).await;
    assert_that!(manager.state(), eq(ServerState::Idle));
}
