#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    InputChanged(String),
    /// User submitted the current URL input for cloning.
    UrlSubmitted,
    /// User picked a result tab.
    TabSelected(crate::Tab),
    /// Provider answered with a code/html pair. Either field may be empty.
    CloneSucceeded {
        request_id: crate::RequestId,
        code: String,
        html: String,
    },
    /// Provider call failed.
    CloneFailed {
        request_id: crate::RequestId,
        description: Option<String>,
    },
    /// User clicked the theme toggle.
    ThemeToggled,
    /// Theme read from the preference store at start-up.
    ThemeRestored(crate::Theme),
    /// User asked to write the current result to disk.
    ExportRequested,
    /// Export effect finished.
    ExportFinished { path: String },
    /// Export effect failed.
    ExportFailed { message: String },
    /// Fallback for unrecognised input.
    NoOp,
}
