//! The lifecycle manager: sole owner of the server state.

use crate::{EVENT_CHANNEL_CAPACITY, LifecycleContext, Launcher, Rejection, lifecycle::messages};

use bb_core::{InstanceId, LifecycleEvent, Request, RequestOpCode, ServerState};
use bb_worlds::WorldStore;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ManagerSettings {
    /// Session log tailed by the logs command
    pub log_file: PathBuf,
    /// Reported verbatim by the address command; empty when none is configured
    pub public_address: String,
    /// How long a shutdown waits for a graceful stop before killing
    pub shutdown_timeout: Duration,
}

/// Processes requests and lifecycle events one at a time, each to
/// completion, and answers every request with exactly one response.
pub struct LifecycleManager {
    pub(crate) ctx: LifecycleContext,
    pub(crate) launcher: Arc<dyn Launcher>,
    pub(crate) worlds: WorldStore,
    pub(crate) settings: ManagerSettings,
    pub(crate) events_tx: mpsc::Sender<LifecycleEvent>,
    events_rx: mpsc::Receiver<LifecycleEvent>,
}

impl LifecycleManager {
    pub fn new(
        launcher: Arc<dyn Launcher>,
        worlds: WorldStore,
        settings: ManagerSettings,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            ctx: LifecycleContext::default(),
            launcher,
            worlds,
            settings,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> ServerState {
        self.ctx.state
    }

    /// Instance of the live server, if there is one
    pub fn current_instance(&self) -> Option<InstanceId> {
        self.ctx.handle.as_ref().map(|handle| handle.instance)
    }

    pub fn current_world(&self) -> Option<&str> {
        self.ctx
            .handle
            .as_ref()
            .map(|handle| handle.world_name.as_str())
    }

    /// Sender for the manager's event queue. Background work reports through it.
    pub fn event_sender(&self) -> mpsc::Sender<LifecycleEvent> {
        self.events_tx.clone()
    }

    /// Next queued lifecycle event, without applying it.
    pub async fn next_event(&mut self) -> Option<LifecycleEvent> {
        self.events_rx.recv().await
    }

    pub async fn handle_request(&mut self, request: Request) -> String {
        info!("-> {} (state: {})", request.op, self.ctx.state);

        let result = match request.op {
            RequestOpCode::Start => self.start(&request.args).await,
            RequestOpCode::Stop => self.stop().await,
            RequestOpCode::Kill => self.kill().await,
            RequestOpCode::Status => Ok(self.status()),
            RequestOpCode::Logs => self.logs(&request.args).await,
            RequestOpCode::Address => Ok(self.address()),
            RequestOpCode::Help => Ok(messages::help()),
            RequestOpCode::Create => self.create(&request.args).await,
            RequestOpCode::List => Ok(self.list().await),
        };

        let response = match result {
            Ok(text) => text,
            Err(rejection) => Self::reject(rejection),
        };

        info!("<- {}", response);
        response
    }

    /// Applies one event. Stale events produce no response.
    pub async fn handle_event(&mut self, event: LifecycleEvent) -> Option<String> {
        info!("-> event {} (state: {})", event.name(), self.ctx.state);

        let response = match event {
            LifecycleEvent::Started { instance } => self.on_started(instance),
            LifecycleEvent::Stopped {
                instance,
                exit_code,
            } => self.on_stopped(instance, exit_code),
            LifecycleEvent::CreateWorldSuccess { name } => Some(self.on_world_created(&name)),
            LifecycleEvent::CreateWorldFailure { name, reason } => {
                Some(self.on_world_create_failed(&name, &reason))
            }
        };

        if let Some(ref text) = response {
            info!("<- {}", text);
        }
        response
    }

    /// Serves requests and events until `requests` closes, then shuts the
    /// server down.
    pub async fn run(
        mut self,
        mut requests: mpsc::Receiver<Request>,
        responses: mpsc::Sender<String>,
    ) {
        info!("Lifecycle manager running");

        loop {
            tokio::select! {
                request = requests.recv() => match request {
                    Some(request) => {
                        let response = self.handle_request(request).await;
                        Self::respond(&responses, response).await;
                    }
                    None => break,
                },
                Some(event) = self.events_rx.recv() => {
                    if let Some(response) = self.handle_event(event).await {
                        Self::respond(&responses, response).await;
                    }
                }
            }
        }

        self.shutdown(&responses).await;
        info!("Lifecycle manager stopped");
    }

    /// Stops a live server: graceful stop first, kill once the timeout passes.
    pub async fn shutdown(&mut self, responses: &mpsc::Sender<String>) {
        if self.ctx.handle.is_none() && self.ctx.state != ServerState::Stopping {
            info!("No server running, nothing to shut down");
            return;
        }

        info!("Shutting down server (state: {})", self.ctx.state);

        if self.ctx.state == ServerState::Running {
            let response = self.handle_request(Request::bare(RequestOpCode::Stop)).await;
            Self::respond(responses, response).await;
        }

        let timeout = self.settings.shutdown_timeout;
        if self.ctx.state == ServerState::Stopping {
            if tokio::time::timeout(timeout, self.settle(responses))
                .await
                .is_ok()
            {
                info!("Server stopped gracefully");
                return;
            }
            warn!("Server did not stop within {timeout:?}, killing it");
        }

        if self.ctx.handle.is_some() {
            let response = self.handle_request(Request::bare(RequestOpCode::Kill)).await;
            Self::respond(responses, response).await;
        }

        if tokio::time::timeout(timeout, self.settle(responses))
            .await
            .is_err()
        {
            warn!("Server still has not reported an exit after kill");
        }
    }

    /// Applies events until the server is gone.
    async fn settle(&mut self, responses: &mpsc::Sender<String>) {
        while !(self.ctx.state.accepts_start() && self.ctx.handle.is_none()) {
            let Some(event) = self.events_rx.recv().await else {
                return;
            };
            if let Some(response) = self.handle_event(event).await {
                Self::respond(responses, response).await;
            }
        }
    }

    fn reject(rejection: Rejection) -> String {
        format!("{}{}", messages::ERROR_PREFIX, rejection)
    }

    async fn respond(responses: &mpsc::Sender<String>, response: String) {
        if responses.send(response).await.is_err() {
            warn!("Response channel closed, dropping response");
        }
    }
}
