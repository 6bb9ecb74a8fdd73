use scraper::{Html, Selector};

const TRUNCATED_MARKER: &str = "\n.[truncated]";
pub const MAX_PREVIEW_CONTENT: usize = 40_960;

/// Renders preview HTML as inert text. Scripts and styles never run; the
/// output is plain markdown-flavoured text, truncated for display.
pub fn render_preview_text(html: &str) -> String {
    let text = sanitize_for_terminal(&html2md::parse_html(html));
    let text = text.trim();
    if text.len() <= MAX_PREVIEW_CONTENT {
        text.to_string()
    } else {
        let mut end = MAX_PREVIEW_CONTENT;
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}{TRUNCATED_MARKER}", &text[..end])
    }
}

/// Drops C0/C1 control characters (ESC, BEL, CR, CSI and friends) so text
/// from a provider cannot drive the terminal. Newlines and tabs stay.
pub fn sanitize_for_terminal(text: &str) -> String {
    text.chars()
        .filter(|c| matches!(c, '\n' | '\t') || !c.is_control())
        .collect()
}

/// Page title from `<title>`, falling back to the first `<h1>`.
pub fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    ["title", "h1"].iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        let text = document
            .select(&selector)
            .next()?
            .text()
            .collect::<String>();
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        (!text.is_empty()).then_some(text)
    })
}

#[cfg(test)]
mod tests {
    use super::{page_title, render_preview_text, sanitize_for_terminal, MAX_PREVIEW_CONTENT};

    #[test]
    fn renders_heading_and_paragraph() {
        let text = render_preview_text("<h1>Cloned Website</h1><p>Hello</p>");
        assert!(text.contains("Cloned Website"));
        assert!(text.contains("Hello"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn long_preview_is_truncated() {
        let html = format!("<p>{}</p>", "a".repeat(MAX_PREVIEW_CONTENT + 64));
        let text = render_preview_text(&html);
        assert!(text.ends_with("\n.[truncated]"));
        assert_eq!(text.len(), MAX_PREVIEW_CONTENT + "\n.[truncated]".len());
    }

    #[test]
    fn control_sequences_are_stripped() {
        let clean = sanitize_for_terminal("a\x1b[2J\x1b]0;pwned\x07b\r\u{9b}c\n\td");
        assert_eq!(clean, "a[2J]0;pwnedbc\n\td");
    }

    #[test]
    fn preview_drops_escapes_inside_markup() {
        let text = render_preview_text("<p>x\x1b]52;c;ZXZpbA==\x07y</p>");
        assert!(!text.contains('\x1b'));
        assert!(!text.contains('\x07'));
        assert!(text.contains('x') && text.contains('y'));
    }

    #[test]
    fn title_prefers_title_then_h1() {
        let html = "<html><head><title> My  Site </title></head><body><h1>Other</h1></body></html>";
        assert_eq!(page_title(html).as_deref(), Some("My Site"));
        assert_eq!(
            page_title("<div><h1>Cloned Website</h1></div>").as_deref(),
            Some("Cloned Website")
        );
        assert_eq!(page_title("<p>no heading</p>"), None);
    }
}
