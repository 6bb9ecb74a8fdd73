use crate::{AppState, CloneError, CloneResult, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(url) => {
            state.set_url(url);
            Vec::new()
        }
        Msg::UrlSubmitted => {
            // Only emptiness is checked; the provider judges the rest.
            let url = state.url().trim().to_string();
            if url.is_empty() {
                state.reject_input(CloneError::EmptyUrl);
                return (state, Vec::new());
            }
            let request_id = state.begin_request(&url);
            vec![Effect::RequestClone { request_id, url }]
        }
        Msg::TabSelected(tab) => {
            state.select_tab(tab);
            Vec::new()
        }
        Msg::CloneSucceeded {
            request_id,
            code,
            html,
        } => {
            if !state.is_current(request_id) {
                return (state, Vec::new());
            }
            if code.is_empty() || html.is_empty() {
                state.complete_with_error(CloneError::InvalidResponse);
            } else {
                state.complete_with_result(CloneResult { code, html });
            }
            Vec::new()
        }
        Msg::CloneFailed {
            request_id,
            description,
        } => {
            if !state.is_current(request_id) {
                return (state, Vec::new());
            }
            state.complete_with_error(CloneError::Provider(description));
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            vec![Effect::PersistTheme(theme)]
        }
        Msg::ThemeRestored(theme) => {
            state.set_theme(theme);
            Vec::new()
        }
        // Only the result currently on screen can be exported.
        Msg::ExportRequested => match state.result() {
            Some(result) if !state.is_loading() && state.error().is_none() => {
                vec![Effect::ExportResult {
                    url: state.requested_url().to_string(),
                    result: result.clone(),
                }]
            }
            _ => Vec::new(),
        },
        Msg::ExportFinished { path } => {
            state.set_status(format!("Exported to {path}"));
            Vec::new()
        }
        Msg::ExportFailed { message } => {
            state.set_status(format!("Export failed: {message}"));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
