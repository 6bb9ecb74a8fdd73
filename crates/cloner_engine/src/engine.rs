use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use cloner_logging::{cloner_error, cloner_info, cloner_warn};

use crate::{CloneProvider, EngineEvent, FailureKind, ProviderError, RequestId};

enum EngineCommand {
    Clone { request_id: RequestId, url: String },
}

/// Runs provider calls on a background tokio runtime.
///
/// Requests cannot be cancelled once enqueued; every accepted one produces
/// exactly one `EngineEvent::CloneCompleted`.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(provider: Arc<dyn CloneProvider>) -> Self {
        Self::with_runtime(provider, tokio::runtime::Runtime::new())
    }

    /// Starts the engine on `runtime`. When the runtime could not be built the
    /// engine is stopped from the outset: `enqueue` rejects every request and
    /// `recv_timeout` reports the event channel as disconnected.
    pub fn with_runtime(
        provider: Arc<dyn CloneProvider>,
        runtime: std::io::Result<tokio::runtime::Runtime>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        match runtime {
            Ok(runtime) => {
                thread::spawn(move || {
                    while let Ok(command) = cmd_rx.recv() {
                        let provider = provider.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            handle_command(provider.as_ref(), command, event_tx).await;
                        });
                    }
                });
            }
            Err(err) => {
                cloner_error!("Failed to start engine runtime: {}", err);
            }
        }

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Hands a request to the runtime. Fails only when the engine has stopped,
    /// in which case no completion event will ever arrive for `request_id`.
    pub fn enqueue(
        &self,
        request_id: RequestId,
        url: impl Into<String>,
    ) -> Result<(), ProviderError> {
        let url = url.into();
        cloner_info!("Enqueue clone request_id={} url={}", request_id, url);
        self.cmd_tx
            .send(EngineCommand::Clone { request_id, url })
            .map_err(|_| {
                cloner_warn!("Engine stopped; rejecting request_id={}", request_id);
                ProviderError::new(FailureKind::Internal, "clone engine is not running")
            })
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    /// Blocks up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, RecvTimeoutError> {
        match self.event_rx.lock() {
            Ok(event_rx) => event_rx.recv_timeout(timeout),
            Err(_) => Err(RecvTimeoutError::Disconnected),
        }
    }
}

async fn handle_command(
    provider: &dyn CloneProvider,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Clone { request_id, url } => {
            let result = provider.clone_site(request_id, &url).await;
            if let Err(err) = &result {
                cloner_warn!("Clone request_id={} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::CloneCompleted { request_id, result });
        }
    }
}
