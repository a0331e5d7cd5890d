use std::sync::mpsc;
use std::thread;

use mediaday_logging::mediaday_error;

use crate::{ClientEvent, ClientStopped, RequestId, RetrievalClient};

enum ClientCommand {
    Retrieve {
        request_id: RequestId,
        identifier: String,
        name: String,
    },
}

/// Runs retrievals on a background tokio runtime and reports completions.
///
/// Each enqueued request runs independently; completions arrive in the order
/// they finish, not the order they were submitted.
pub struct ClientHandle {
    cmd_tx: Option<mpsc::Sender<ClientCommand>>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(client: RetrievalClient) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    mediaday_error!("Failed to start client runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&client, command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx: Some(cmd_tx),
            event_rx,
        }
    }

    /// Fails when the worker is gone, either shut down or never started.
    pub fn enqueue(
        &self,
        request_id: RequestId,
        identifier: String,
        name: String,
    ) -> Result<(), ClientStopped> {
        let cmd_tx = self.cmd_tx.as_ref().ok_or(ClientStopped)?;
        cmd_tx
            .send(ClientCommand::Retrieve {
                request_id,
                identifier,
                name,
            })
            .map_err(|_| ClientStopped)
    }

    /// Stops accepting requests. Requests already running still report back,
    /// after which `recv` returns `None`.
    pub fn shutdown(&mut self) {
        self.cmd_tx = None;
    }

    /// Blocks until the next completion; `None` once the worker is gone.
    pub fn recv(&self) -> Option<ClientEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &RetrievalClient,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Retrieve {
            request_id,
            identifier,
            name,
        } => {
            let outcome = client.retrieve(&identifier, &name).await;
            let _ = event_tx.send(ClientEvent::RetrievalCompleted {
                request_id,
                outcome,
            });
        }
    }
}
