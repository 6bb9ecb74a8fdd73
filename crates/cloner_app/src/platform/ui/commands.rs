use cloner_core::{Msg, Tab};

pub const HELP_TEXT: &str = "\
Commands:
  <url>          set the URL and clone it
  url <text>     set the URL without cloning
  submit         clone the current URL
  preview, code  switch result tab
  theme          toggle light/dark theme
  export         write the current result to the output directory
  help           show this help
  quit           exit";

/// Everything the main loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Msg(Msg),
    Help,
    Unknown(String),
    /// Stdin reached EOF; exit once no request is pending.
    InputClosed,
    Quit,
}

/// Maps one input line to the events it triggers.
pub fn parse_line(line: &str) -> Vec<UiEvent> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "url" => vec![UiEvent::Msg(Msg::InputChanged(rest.to_string()))],
        "submit" | "clone" => vec![UiEvent::Msg(Msg::UrlSubmitted)],
        "preview" => vec![UiEvent::Msg(Msg::TabSelected(Tab::Preview))],
        "code" => vec![UiEvent::Msg(Msg::TabSelected(Tab::Code))],
        "theme" => vec![UiEvent::Msg(Msg::ThemeToggled)],
        "export" => vec![UiEvent::Msg(Msg::ExportRequested)],
        "help" | "?" => vec![UiEvent::Help],
        "quit" | "exit" | "q" => vec![UiEvent::Quit],
        _ if looks_like_url(line) => vec![
            UiEvent::Msg(Msg::InputChanged(line.to_string())),
            UiEvent::Msg(Msg::UrlSubmitted),
        ],
        _ => vec![UiEvent::Unknown(line.to_string())],
    }
}

fn looks_like_url(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    !line.contains(char::is_whitespace)
        && (lower.starts_with("http://") || lower.starts_with("https://"))
}

#[cfg(test)]
mod tests {
    use cloner_core::{Msg, Tab};
    use pretty_assertions::assert_eq;

    use super::{parse_line, UiEvent};

    #[test]
    fn bare_url_sets_and_submits() {
        assert_eq!(
            parse_line("  https://example.com  "),
            vec![
                UiEvent::Msg(Msg::InputChanged("https://example.com".to_string())),
                UiEvent::Msg(Msg::UrlSubmitted),
            ]
        );
    }

    #[test]
    fn url_command_only_edits_input() {
        assert_eq!(
            parse_line("url https://example.com"),
            vec![UiEvent::Msg(Msg::InputChanged(
                "https://example.com".to_string()
            ))]
        );
        assert_eq!(
            parse_line("url"),
            vec![UiEvent::Msg(Msg::InputChanged(String::new()))]
        );
    }

    #[test]
    fn keywords_map_to_messages() {
        assert_eq!(
            parse_line("CODE"),
            vec![UiEvent::Msg(Msg::TabSelected(Tab::Code))]
        );
        assert_eq!(parse_line("theme"), vec![UiEvent::Msg(Msg::ThemeToggled)]);
        assert_eq!(parse_line("export"), vec![UiEvent::Msg(Msg::ExportRequested)]);
        assert_eq!(parse_line("q"), vec![UiEvent::Quit]);
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert!(parse_line("   ").is_empty());
        assert_eq!(
            parse_line("frobnicate now"),
            vec![UiEvent::Unknown("frobnicate now".to_string())]
        );
    }
}
