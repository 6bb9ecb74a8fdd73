use crate::{Tab, Theme};

pub const LOADING_MESSAGE: &str = "Analyzing website and generating code...";
pub const EMPTY_MESSAGE: &str = "Enter a URL to start cloning a website";
pub const SUBMIT_LABEL: &str = "Clone Website";
pub const SUBMIT_LABEL_LOADING: &str = "Cloning...";

/// What the output panel shows. Priority: loading, error, empty, result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputView {
    Loading,
    Error {
        message: String,
    },
    #[default]
    Empty,
    Result {
        active_tab: Tab,
        code: String,
        html: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url: String,
    pub is_loading: bool,
    pub theme: Theme,
    pub output: OutputView,
    /// Outcome of the last export, if any.
    pub status: Option<String>,
    pub dirty: bool,
}

impl AppViewModel {
    /// The URL input is disabled while a request is pending.
    pub fn input_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL
        }
    }
}
