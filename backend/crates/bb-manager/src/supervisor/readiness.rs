//! Readiness polling: is the game server accepting connections yet?

use bb_core::{InstanceId, LifecycleEvent};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn is_ready(&self) -> bool;
}

/// Ready once a TCP connection to the server's port succeeds.
#[derive(Debug, Clone)]
pub struct PortProbe {
    host: String,
    port: u16,
    connect_timeout: Duration,
}

impl PortProbe {
    pub fn new(host: impl Into<String>, port: u16, connect_timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout,
        }
    }
}

#[async_trait]
impl ReadinessProbe for PortProbe {
    async fn is_ready(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        matches!(
            tokio::time::timeout(self.connect_timeout, connect).await,
            Ok(Ok(_))
        )
    }
}

/// Probes every `interval` until ready, then sends one `Started` and returns.
/// Runs until aborted otherwise.
pub async fn poll_until_ready(
    probe: Arc<dyn ReadinessProbe>,
    interval: Duration,
    instance: InstanceId,
    events: mpsc::Sender<LifecycleEvent>,
) {
    loop {
        if probe.is_ready().await {
            info!("Server {instance} is accepting connections");
            let _ = events.send(LifecycleEvent::Started { instance }).await;
            return;
        }

        debug!("Server {instance} not ready yet, retrying in {interval:?}");
        tokio::time::sleep(interval).await;
    }
}
