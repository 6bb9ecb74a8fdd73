use sha2::{Digest, Sha256};

const MAX_STEM_LEN: usize = 80;

/// Filesystem-safe stem shared by all export files of one result:
/// `{name}--{short_hash(url)}`, where `name` is the title, the URL host, or
/// `untitled`.
pub fn deterministic_stem(title: Option<&str>, url: &str) -> String {
    let host = url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string));
    let name = title
        .filter(|t| !t.trim().is_empty())
        .map(str::to_string)
        .or(host)
        .unwrap_or_else(|| "untitled".to_string());
    format!("{}--{}", sanitize(&name), short_hash(url))
}

fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        let c = if is_forbidden(c) { '_' } else { c };
        if c == '_' && prev_underscore {
            continue;
        }
        prev_underscore = c == '_';
        out.push(c);
    }
    let mut name = out.trim_matches(&['_', ' ', '.'][..]).to_string();
    if name.is_empty() {
        name = "untitled".to_string();
    }
    if name.len() > MAX_STEM_LEN {
        let mut end = MAX_STEM_LEN;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        name.truncate(end);
    }
    if is_reserved_windows_name(&name) {
        name.push('_');
    }
    name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().take(4).map(|byte| format!("{byte:02x}")).collect()
}
