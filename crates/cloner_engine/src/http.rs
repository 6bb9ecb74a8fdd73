use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use cloner_logging::cloner_debug;

use crate::{CloneProvider, CloneResponse, FailureKind, ProviderError, RequestId};

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl HttpSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Provider backed by a remote service that accepts `{"url": ...}` and answers
/// with a JSON `CloneResponse`.
#[derive(Debug, Clone)]
pub struct HttpCloneProvider {
    settings: HttpSettings,
    client: reqwest::Client,
}

impl HttpCloneProvider {
    pub fn new(settings: HttpSettings) -> Result<Self, ProviderError> {
        reqwest::Url::parse(&settings.endpoint)
            .map_err(|err| ProviderError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ProviderError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn too_large(&self, actual: u64) -> ProviderError {
        ProviderError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl CloneProvider for HttpCloneProvider {
    async fn clone_site(
        &self,
        request_id: RequestId,
        url: &str,
    ) -> Result<CloneResponse, ProviderError> {
        let body = serde_json::json!({ "url": url }).to_string();
        cloner_debug!(
            "POST {} request_id={} body_len={}",
            self.settings.endpoint,
            request_id,
            body.len()
        );

        let response = self
            .client
            .post(self.settings.endpoint.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| ProviderError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        return ProviderError::new(FailureKind::Timeout, err.to_string());
    }
    ProviderError::new(FailureKind::Network, err.to_string())
}
