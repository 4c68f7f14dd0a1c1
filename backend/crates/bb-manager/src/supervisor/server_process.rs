use crate::{ManagerError, ManagerResult, ProcessControl};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::ChildStdin;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Stop and kill capabilities for one spawned server.
///
/// The child itself is owned by its exit watcher task; this side keeps the
/// stdin pipe, the kill signal and the readiness poller.
pub struct ServerProcess {
    stdin: Option<ChildStdin>,
    stop_directive: String,
    kill_tx: Option<oneshot::Sender<()>>,
    poller: Option<JoinHandle<()>>,
}

impl ServerProcess {
    pub fn new(
        stdin: Option<ChildStdin>,
        stop_directive: impl Into<String>,
        kill_tx: oneshot::Sender<()>,
        poller: JoinHandle<()>,
    ) -> Self {
        Self {
            stdin,
            stop_directive: stop_directive.into(),
            kill_tx: Some(kill_tx),
            poller: Some(poller),
        }
    }
}

#[async_trait]
impl ProcessControl for ServerProcess {
    /// Writes the stop directive and closes stdin.
    async fn stop(&mut self) -> ManagerResult<()> {
        let mut stdin = self.stdin.take().ok_or_else(ManagerError::stdin_closed)?;

        let line = format!("{}\n", self.stop_directive);
        stdin
            .write_all(line.as_bytes())
            .await
            .map_err(ManagerError::stdin_write)?;
        stdin.flush().await.map_err(ManagerError::stdin_write)?;

        info!("Sent stop directive {:?}", self.stop_directive);
        Ok(())
    }

    /// Returns only after the readiness poller has finished, so no `Started`
    /// can be sent for this process afterwards.
    async fn kill(&mut self) -> ManagerResult<()> {
        if let Some(poller) = self.poller.take() {
            poller.abort();
            let _ = poller.await;
        }

        self.stdin.take();

        let kill_tx = self.kill_tx.take().ok_or_else(ManagerError::already_killed)?;
        if kill_tx.send(()).is_err() {
            debug!("Server process already exited before kill");
        }

        Ok(())
    }
}
