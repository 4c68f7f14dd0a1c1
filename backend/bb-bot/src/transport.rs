//! Console transport: chat lines in on stdin, responses out on stdout.

use crate::{BotError, BotErrorResult};

use bb_core::{COMMANDS, Request, parse_request};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

const ERROR_PREFIX: &str = "ERROR: ";

pub struct ConsoleTransport {
    prefix: String,
}

impl ConsoleTransport {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// What one chat line means to the bot: None if it is not addressed to
    /// it, else the request or the error text to reply with.
    pub fn interpret(&self, line: &str) -> Option<Result<Request, String>> {
        let command = line.strip_prefix(&self.prefix)?;

        Some(parse_request(command, COMMANDS).map_err(|e| format!("{ERROR_PREFIX}{e}")))
    }

    /// Forwards lines from `reader` until end of input.
    pub async fn read_requests<R>(
        &self,
        reader: R,
        requests: mpsc::Sender<Request>,
        responses: mpsc::Sender<String>,
    ) -> BotErrorResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await.map_err(BotError::console)? {
            match self.interpret(&line) {
                None => debug!("Ignoring message not addressed to the bot"),
                Some(Ok(request)) => {
                    if requests.send(request).await.is_err() {
                        warn!("Lifecycle manager is gone, dropping request");
                        break;
                    }
                }
                Some(Err(error)) => {
                    if responses.send(error).await.is_err() {
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Writes each response followed by a blank line, until every sender is gone.
pub async fn write_responses<W>(
    mut responses: mpsc::Receiver<String>,
    mut out: W,
) -> BotErrorResult<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = responses.recv().await {
        out.write_all(response.as_bytes())
            .await
            .map_err(BotError::console)?;
        out.write_all(b"\n\n").await.map_err(BotError::console)?;
        out.flush().await.map_err(BotError::console)?;
    }

    Ok(())
}
