use thiserror::Error;

pub(crate) const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Errors surfaced to the user in the result display. None of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloneError {
    #[error("Please enter a valid URL.")]
    EmptyUrl,
    #[error("Failed to clone website. The AI response was empty or invalid. Please try a different URL.")]
    InvalidResponse,
    #[error("Failed to clone website. {}", describe(.0))]
    Provider(Option<String>),
}

fn describe(description: &Option<String>) -> &str {
    description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(UNKNOWN_ERROR)
}
