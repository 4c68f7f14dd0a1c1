#![allow(dead_code)]

use bb_core::{COMMANDS, Request, parse_request};
use bb_manager::{
    LifecycleManager, ManagerSettings, ProcessSupervisor, ReadinessProbe, SupervisorSettings,
};
use bb_worlds::WorldStore;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Reads one line, echoes it to the session log and exits cleanly.
pub const OBEDIENT_SERVER: &str = "read line; echo \"received $line\"; exit 0";
/// Ignores stdin and never exits on its own.
pub const STUBBORN_SERVER: &str = "exec sleep 30";
/// Exits with a failure straight away.
pub const CRASHING_SERVER: &str = "exit 1";

pub const WORLD_INIT: &str = r"printf 'gamemode=survival\n' > server.properties && printf 'eula=false\n' > eula.txt";

/// Readiness flipped by the test.
#[derive(Default)]
pub struct FlagProbe {
    ready: AtomicBool,
}

impl FlagProbe {
    pub fn set_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReadinessProbe for FlagProbe {
    async fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

/// A throwaway deployment root with a `hyperion` world.
pub struct Deployment {
    pub temp: TempDir,
    pub probe: Arc<FlagProbe>,
    pub shutdown_timeout: Duration,
}

impl Deployment {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let hyperion = temp.path().join("bb-worlds").join("hyperion");
        std::fs::create_dir_all(&hyperion).unwrap();
        std::fs::write(hyperion.join("server.properties"), "gamemode=survival\n").unwrap();

        Self {
            temp,
            probe: Arc::new(FlagProbe::default()),
            shutdown_timeout: Duration::from_secs(5),
        }
    }

    pub fn worlds_dir(&self) -> PathBuf {
        self.temp.path().join("bb-worlds")
    }

    pub fn log_file(&self) -> PathBuf {
        self.temp.path().join("bb-logs")
    }

    /// Supervisor running `sh -c <script>` as the game server.
    pub fn supervisor(&self, script: &str) -> ProcessSupervisor {
        ProcessSupervisor::new(
            SupervisorSettings {
                program: "sh".to_string(),
                args: vec!["-c".to_string(), script.to_string()],
                worlds_dir: self.worlds_dir(),
                log_file: self.log_file(),
                stop_directive: "stop".to_string(),
                poll_interval: Duration::from_millis(20),
            },
            self.probe.clone(),
        )
    }

    pub fn manager(&self, script: &str) -> LifecycleManager {
        LifecycleManager::new(
            Arc::new(self.supervisor(script)),
            WorldStore::new(
                self.worlds_dir(),
                "sh",
                vec!["-c".to_string(), WORLD_INIT.to_string()],
            ),
            ManagerSettings {
                log_file: self.log_file(),
                public_address: "mc.example.com".to_string(),
                shutdown_timeout: self.shutdown_timeout,
            },
        )
    }

    /// Runs a manager loop in the background.
    pub fn launch(&self, script: &str) -> Bot {
        let (requests_tx, requests_rx) = mpsc::channel(16);
        let (responses_tx, responses_rx) = mpsc::channel(16);
        let task = tokio::spawn(self.manager(script).run(requests_rx, responses_tx));

        Bot {
            requests: Some(requests_tx),
            responses: responses_rx,
            task,
        }
    }
}

/// The chat side of a running manager.
pub struct Bot {
    pub requests: Option<mpsc::Sender<Request>>,
    pub responses: mpsc::Receiver<String>,
    pub task: JoinHandle<()>,
}

impl Bot {
    pub async fn send(&self, message: &str) {
        let request = parse_request(message, COMMANDS).unwrap();
        self.requests
            .as_ref()
            .unwrap()
            .send(request)
            .await
            .unwrap();
    }

    pub async fn next(&mut self) -> String {
        tokio::time::timeout(RESPONSE_TIMEOUT, self.responses.recv())
            .await
            .expect("timed out waiting for a response")
            .expect("response channel closed")
    }

    /// Sends a message and returns its direct response.
    pub async fn ask(&mut self, message: &str) -> String {
        self.send(message).await;
        self.next().await
    }

    /// Closes the request side and waits for the manager to finish.
    pub async fn hang_up(mut self) -> Vec<String> {
        self.requests.take();
        tokio::time::timeout(RESPONSE_TIMEOUT, &mut self.task)
            .await
            .expect("manager did not shut down")
            .unwrap();

        let mut rest = Vec::new();
        while let Ok(response) = self.responses.try_recv() {
            rest.push(response);
        }
        rest
    }
}
