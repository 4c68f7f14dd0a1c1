
use crate::{
    Launcher, LifecycleManager, ManagerError, ManagerResult, ManagerSettings, ProcessControl,
};

use bb_core::{COMMANDS, InstanceId, LifecycleEvent, Request, parse_request};
use bb_worlds::WorldStore;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub(crate) const ADDRESS: &str = "mc.example.com:25565";

/// Records every spawn, stop and kill instead of running anything.
#[derive(Default)]
pub(crate) struct FakeLauncher {
    pub(crate) calls: Arc<Mutex<Vec<String>>>,
    pub(crate) fail_spawn: AtomicBool,
    pub(crate) fail_stop: AtomicBool,
}

impl FakeLauncher {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Launcher for FakeLauncher {
    async fn spawn(
        &self,
        world: &str,
        _instance: InstanceId,
        _events: mpsc::Sender<LifecycleEvent>,
    ) -> ManagerResult<Box<dyn ProcessControl>> {
        if self.fail_spawn.load(Ordering::SeqCst) {
            return Err(ManagerError::process_spawn(
                "fake-server",
                std::io::Error::other("spawn refused"),
            ));
        }

        self.calls.lock().unwrap().push(format!("spawn {world}"));
        Ok(Box::new(FakeProcess {
            calls: self.calls.clone(),
            fail_stop: self.fail_stop.load(Ordering::SeqCst),
        }))
    }
}

pub(crate) struct FakeProcess {
    calls: Arc<Mutex<Vec<String>>>,
    fail_stop: bool,
}

#[async_trait]
impl ProcessControl for FakeProcess {
    async fn stop(&mut self) -> ManagerResult<()> {
        if self.fail_stop {
            return Err(ManagerError::stdin_closed());
        }
        self.calls.lock().unwrap().push("stop".to_string());
        Ok(())
    }

    async fn kill(&mut self) -> ManagerResult<()> {
        self.calls.lock().unwrap().push("kill".to_string());
        Ok(())
    }
}

pub(crate) struct Fixture {
    pub(crate) temp: TempDir,
    pub(crate) launcher: Arc<FakeLauncher>,
    pub(crate) manager: LifecycleManager,
}

impl Fixture {
    /// A deployment with one world, `hyperion`, in survival mode.
    pub(crate) fn new() -> Self {
        Self::with_address(Some(ADDRESS))
    }

    pub(crate) fn with_address(address: Option<&str>) -> Self {
        Self::build(address, "true", Vec::new())
    }

    /// World creation runs `program args` inside the new world directory.
    pub(crate) fn with_world_init(program: &str, args: &[&str]) -> Self {
        Self::build(
            Some(ADDRESS),
            program,
            args.iter().map(|arg| arg.to_string()).collect(),
        )
    }

    fn build(address: Option<&str>, init_program: &str, init_args: Vec<String>) -> Self {
        let temp = TempDir::new().unwrap();
        let worlds_dir = temp.path().join("bb-worlds");
        let hyperion = worlds_dir.join("hyperion");
        std::fs::create_dir_all(&hyperion).unwrap();
        std::fs::write(hyperion.join("server.properties"), "gamemode=survival\n").unwrap();

        let launcher = Arc::new(FakeLauncher::default());
        let manager = LifecycleManager::new(
            launcher.clone(),
            WorldStore::new(&worlds_dir, init_program, init_args),
            ManagerSettings {
                log_file: temp.path().join("bb-logs"),
                public_address: address.unwrap_or_default().to_string(),
                shutdown_timeout: Duration::from_secs(1),
            },
        );

        Self {
            temp,
            launcher,
            manager,
        }
    }

    pub(crate) async fn send(&mut self, message: &str) -> String {
        self.manager.handle_request(request(message)).await
    }

    /// Starts hyperion and delivers its readiness event.
    pub(crate) async fn running(mut self) -> Self {
        self.send("start hyperion").await;
        let instance = self.manager.current_instance().unwrap();
        self.manager
            .handle_event(LifecycleEvent::Started { instance })
            .await;
        self
    }
}

pub(crate) fn request(message: &str) -> Request {
    parse_request(message, COMMANDS).unwrap()
}
