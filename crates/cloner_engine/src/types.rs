use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;

/// What a clone provider hands back. Missing fields decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneResponse {
    #[serde(default)]
    pub tsx_code: String,
    #[serde(default)]
    pub preview_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CloneCompleted {
        request_id: RequestId,
        result: Result<CloneResponse, ProviderError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    pub kind: FailureKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Human-readable description for the user, if the failure carries one.
    pub fn description(&self) -> Option<String> {
        let message = self.message.trim();
        if message.is_empty() {
            None
        } else {
            Some(message.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
    Internal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Internal => write!(f, "internal error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CloneResponse, FailureKind, ProviderError};

    #[test]
    fn response_uses_camel_case_fields() {
        let response: CloneResponse =
            serde_json::from_str(r#"{"tsxCode":"X","previewHtml":"<p>Y</p>"}"#).unwrap();
        assert_eq!(response.tsx_code, "X");
        assert_eq!(response.preview_html, "<p>Y</p>");
    }

    #[test]
    fn missing_fields_decode_empty() {
        let response: CloneResponse = serde_json::from_str(r#"{"tsxCode":"X"}"#).unwrap();
        assert_eq!(response.preview_html, "");
    }

    #[test]
    fn blank_message_has_no_description() {
        let err = ProviderError::new(FailureKind::Network, "  ");
        assert_eq!(err.description(), None);
        let err = ProviderError::new(FailureKind::HttpStatus(503), "service unavailable");
        assert_eq!(err.description().as_deref(), Some("service unavailable"));
        assert_eq!(err.to_string(), "http status 503: service unavailable");
    }
}
