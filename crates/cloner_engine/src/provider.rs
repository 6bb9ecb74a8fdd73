use std::time::Duration;

use cloner_logging::cloner_debug;

use crate::{CloneResponse, ProviderError, RequestId};

/// Fixed wait of the mock provider before it answers.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(2000);

/// Turns a URL into generated code plus renderable HTML.
#[async_trait::async_trait]
pub trait CloneProvider: Send + Sync {
    async fn clone_site(
        &self,
        request_id: RequestId,
        url: &str,
    ) -> Result<CloneResponse, ProviderError>;
}

/// Stand-in provider: waits, then answers with templates embedding the URL.
#[derive(Debug, Clone)]
pub struct MockCloneProvider {
    delay: Duration,
}

impl MockCloneProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn respond(url: &str) -> CloneResponse {
        CloneResponse {
            tsx_code: format!(
                "// Generated TSX code for {url}\nexport default function ClonedComponent() {{\n  return <div>Cloned content from {{url}}</div>;\n}}"
            ),
            preview_html: format!(
                "<div style=\"padding: 20px; font-family: Arial, sans-serif;\"><h1>Cloned Website</h1><p>This is a preview of the cloned content from: {url}</p></div>"
            ),
        }
    }
}

impl Default for MockCloneProvider {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

#[async_trait::async_trait]
impl CloneProvider for MockCloneProvider {
    async fn clone_site(
        &self,
        request_id: RequestId,
        url: &str,
    ) -> Result<CloneResponse, ProviderError> {
        cloner_debug!(
            "mock clone request_id={} delay_ms={}",
            request_id,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(Self::respond(url))
    }
}
