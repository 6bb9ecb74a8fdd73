//! Cloner engine: clone providers, request execution and result export.
mod engine;
mod export;
mod filename;
mod http;
mod persist;
mod preview;
mod provider;
mod types;

pub use engine::EngineHandle;
pub use export::{export_result, ExportError, ExportSummary};
pub use filename::deterministic_stem;
pub use http::{HttpCloneProvider, HttpSettings};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use preview::{page_title, render_preview_text, sanitize_for_terminal, MAX_PREVIEW_CONTENT};
pub use provider::{CloneProvider, MockCloneProvider, DEFAULT_MOCK_DELAY};
pub use types::{CloneResponse, EngineEvent, FailureKind, ProviderError, RequestId};
