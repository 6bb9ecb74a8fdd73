use crate::view_model::{AppViewModel, OutputView};
use crate::CloneError;

pub type RequestId = u64;

/// URL shown in the input box on a fresh start.
pub const DEFAULT_URL: &str = "https://tailwindcss.com/docs/installation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Preview,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Literal stored in the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored literal; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Code/html pair produced by a successful clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneResult {
    pub code: String,
    pub html: String,
}

/// Owner of the request lifecycle and the result display state.
///
/// Mutated only through [`crate::update`]. `is_loading` and `error` are never
/// set at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    url: String,
    is_loading: bool,
    error: Option<CloneError>,
    result: Option<CloneResult>,
    active_tab: Tab,
    theme: Theme,
    next_request_id: RequestId,
    pending_request: Option<RequestId>,
    requested_url: String,
    status: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            is_loading: false,
            error: None,
            result: None,
            active_tab: Tab::Preview,
            theme: Theme::default(),
            next_request_id: 1,
            pending_request: None,
            requested_url: String::new(),
            status: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let output = if self.is_loading {
            OutputView::Loading
        } else if let Some(error) = &self.error {
            OutputView::Error {
                message: error.to_string(),
            }
        } else {
            match &self.result {
                Some(result) if !result.code.is_empty() || !result.html.is_empty() => {
                    OutputView::Result {
                        active_tab: self.active_tab,
                        code: result.code.clone(),
                        html: result.html.clone(),
                    }
                }
                _ => OutputView::Empty,
            }
        };

        AppViewModel {
            url: self.url.clone(),
            is_loading: self.is_loading,
            theme: self.theme,
            output,
            status: self.status.clone(),
            dirty: self.dirty,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&CloneError> {
        self.error.as_ref()
    }

    pub fn result(&self) -> Option<&CloneResult> {
        self.result.as_ref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Request whose response will be applied, if one is in flight.
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    /// URL of the most recently dispatched request.
    pub fn requested_url(&self) -> &str {
        &self.requested_url
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.dirty = true;
        }
    }

    /// Starts a new request: loading on, error and result cleared, preview tab forced.
    pub(crate) fn begin_request(&mut self, url: &str) -> RequestId {
        let request_id = self.next_request_id;
        self.requested_url = url.to_string();
        self.next_request_id += 1;
        self.pending_request = Some(request_id);
        self.is_loading = true;
        self.error = None;
        self.result = None;
        self.active_tab = Tab::Preview;
        self.status = None;
        self.dirty = true;
        request_id
    }

    /// Records a validation error. Any in-flight request is abandoned.
    pub(crate) fn reject_input(&mut self, error: CloneError) {
        self.pending_request = None;
        self.is_loading = false;
        self.error = Some(error);
        self.dirty = true;
    }

    /// Whether a response tagged `request_id` should be applied.
    pub(crate) fn is_current(&self, request_id: RequestId) -> bool {
        self.pending_request == Some(request_id)
    }

    pub(crate) fn complete_with_result(&mut self, result: CloneResult) {
        self.pending_request = None;
        self.is_loading = false;
        self.error = None;
        self.result = Some(result);
        self.dirty = true;
    }

    pub(crate) fn complete_with_error(&mut self, error: CloneError) {
        self.pending_request = None;
        self.is_loading = false;
        self.result = None;
        self.error = Some(error);
        self.dirty = true;
    }

    pub(crate) fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.dirty = true;
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.dirty = true;
        }
    }

    pub(crate) fn set_status(&mut self, status: String) {
        self.status = Some(status);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn theme_literals_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
