use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use cloner_core::{Effect, Msg};
use cloner_engine::{export_result, CloneProvider, EngineEvent, EngineHandle};
use cloner_logging::{cloner_info, cloner_warn};

use super::persistence::PreferenceStore;
use super::ui::commands::UiEvent;

const EVENT_POLL: Duration = Duration::from_millis(50);

/// Executes effects emitted by `update` and feeds engine results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    prefs: PreferenceStore,
    output_dir: PathBuf,
    event_tx: mpsc::Sender<UiEvent>,
}

impl EffectRunner {
    pub fn new(
        provider: Arc<dyn CloneProvider>,
        prefs: PreferenceStore,
        output_dir: PathBuf,
        event_tx: mpsc::Sender<UiEvent>,
    ) -> Self {
        Self::with_engine(EngineHandle::new(provider), prefs, output_dir, event_tx)
    }

    fn with_engine(
        engine: EngineHandle,
        prefs: PreferenceStore,
        output_dir: PathBuf,
        event_tx: mpsc::Sender<UiEvent>,
    ) -> Self {
        let runner = Self {
            engine,
            prefs,
            output_dir,
            event_tx,
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestClone { request_id, url } => {
                    // A rejected request would otherwise stay pending forever.
                    if let Err(err) = self.engine.enqueue(request_id, url) {
                        let msg = Msg::CloneFailed {
                            request_id,
                            description: err.description(),
                        };
                        let _ = self.event_tx.send(UiEvent::Msg(msg));
                    }
                }
                Effect::PersistTheme(theme) => {
                    self.prefs.save_theme(theme);
                }
                Effect::ExportResult { url, result } => {
                    let exported_utc = Utc::now().to_rfc3339();
                    let msg = match export_result(
                        &self.output_dir,
                        &url,
                        &result.code,
                        &result.html,
                        &exported_utc,
                    ) {
                        Ok(summary) => Msg::ExportFinished {
                            path: summary.manifest_path.display().to_string(),
                        },
                        Err(err) => {
                            cloner_warn!("Export of {} failed: {}", url, err);
                            Msg::ExportFailed {
                                message: err.to_string(),
                            }
                        }
                    };
                    let _ = self.event_tx.send(UiEvent::Msg(msg));
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let event_tx = self.event_tx.clone();
        thread::spawn(move || loop {
            let event = match engine.recv_timeout(EVENT_POLL) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    cloner_warn!("Engine stopped; no further clone results");
                    break;
                }
            };
            if event_tx.send(UiEvent::Msg(map_event(event))).is_err() {
                cloner_info!("UI gone; stopping engine event loop");
                break;
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CloneCompleted { request_id, result } => match result {
            Ok(response) => Msg::CloneSucceeded {
                request_id,
                code: response.tsx_code,
                html: response.preview_html,
            },
            Err(err) => Msg::CloneFailed {
                request_id,
                description: err.description(),
            },
        },
    }
}
