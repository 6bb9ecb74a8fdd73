use crate::{CloneResult, RequestId, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the clone provider for `url`; the answer comes back tagged with `request_id`.
    RequestClone { request_id: RequestId, url: String },
    /// Write the theme preference to the local store.
    PersistTheme(Theme),
    /// Write the current result to the output directory.
    ExportResult { url: String, result: CloneResult },
}
