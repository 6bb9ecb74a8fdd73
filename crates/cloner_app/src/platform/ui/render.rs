use std::io::IsTerminal;

use cloner_core::{AppViewModel, OutputView, Tab, Theme, EMPTY_MESSAGE, LOADING_MESSAGE};
use cloner_engine::{render_preview_text, sanitize_for_terminal};
use crossterm::style::{Color, ContentStyle, Stylize};

const TITLE: &str = "AI Website Cloner";
const RULE_WIDTH: usize = 72;

/// Whether frames carry terminal colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Ansi,
    Plain,
}

impl ColorMode {
    /// Colour only when stdout is an interactive terminal.
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            ColorMode::Ansi
        } else {
            ColorMode::Plain
        }
    }
}

struct Palette {
    heading: ContentStyle,
    accent: ContentStyle,
    muted: ContentStyle,
    error: ContentStyle,
    mode: ColorMode,
}

impl Palette {
    fn new(theme: Theme, mode: ColorMode) -> Self {
        let plain = ContentStyle::new();
        match theme {
            Theme::Dark => Self {
                heading: plain.with(Color::White).bold(),
                accent: plain.with(Color::Blue),
                muted: plain.with(Color::DarkGrey),
                error: plain.with(Color::Red),
                mode,
            },
            Theme::Light => Self {
                heading: plain.with(Color::Black).bold(),
                accent: plain.with(Color::DarkBlue),
                muted: plain.with(Color::Grey),
                error: plain.with(Color::DarkRed),
                mode,
            },
        }
    }

    fn paint(&self, style: ContentStyle, text: &str) -> String {
        match self.mode {
            ColorMode::Ansi => style.apply(text).to_string(),
            ColorMode::Plain => text.to_string(),
        }
    }
}

/// Full screen frame for the current view. Everything that did not originate
/// here is stripped of control characters before it reaches the terminal.
pub fn render(view: &AppViewModel, mode: ColorMode) -> String {
    let p = Palette::new(view.theme, mode);
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}\n",
        p.paint(p.heading, TITLE),
        p.paint(p.muted, &format!("[theme: {}]", view.theme.as_str()))
    ));
    let input_state = if view.input_enabled() { "" } else { " (locked)" };
    out.push_str(&format!(
        "URL: {}{input_state}  {}\n",
        sanitize_for_terminal(&view.url),
        p.paint(p.accent, &format!("[{}]", view.submit_label()))
    ));
    out.push_str(&rule);
    out.push('\n');

    match &view.output {
        OutputView::Loading => {
            out.push_str(&p.paint(p.muted, LOADING_MESSAGE));
            out.push('\n');
        }
        OutputView::Error { message } => {
            out.push_str(&p.paint(p.error, "Error"));
            out.push('\n');
            out.push_str(&sanitize_for_terminal(message));
            out.push('\n');
        }
        OutputView::Empty => {
            out.push_str(&p.paint(p.muted, EMPTY_MESSAGE));
            out.push('\n');
        }
        OutputView::Result {
            active_tab,
            code,
            html,
        } => {
            out.push_str(&tab_bar(*active_tab, &p));
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
            let body = match active_tab {
                Tab::Preview => render_preview_text(html),
                Tab::Code => sanitize_for_terminal(code),
            };
            out.push_str(&body);
            out.push('\n');
        }
    }

    if let Some(status) = &view.status {
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&p.paint(p.muted, &sanitize_for_terminal(status)));
        out.push('\n');
    }
    out
}

fn tab_bar(active: Tab, p: &Palette) -> String {
    [(Tab::Preview, "Preview"), (Tab::Code, "Code")]
        .iter()
        .map(|(tab, label)| {
            if *tab == active {
                p.paint(p.accent, &format!("[{label}]"))
            } else {
                p.paint(p.muted, &format!(" {label} "))
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
