use super::SnippetService;
use crate::models::UploadResult;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

/// Network-backed client for a single hastebin host.
#[derive(Debug, Clone)]
pub struct HasteClient {
    client: Client,
    host: String,
    timeout: Option<Duration>,
}

impl HasteClient {
    /// Create a client for `host`, stored verbatim.
    pub fn new(host: String) -> Self {
        Self::new_with_client(host, Client::new())
    }

    pub fn new_with_client(host: String, client: Client) -> Self {
        Self {
            client,
            host,
            timeout: None,
        }
    }

    /// Apply a per-request timeout. Requests have no timeout unless set.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        request.send().await.map_err(|e| {
            tracing::error!("Failed to send request to {}: {}", self.host, e);
            Error::Network(e)
        })
    }

    async fn read_body(response: Response) -> Result<Vec<u8>> {
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Io(e)
        })?;
        Ok(body.to_vec())
    }
}

/// Decode a `/documents` response, which must be a JSON object.
fn parse_upload_response(body: &[u8]) -> serde_json::Result<UploadResult> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom(
            "expected a JSON object in upload response",
        ));
    }
    serde_json::from_value(value)
}

#[async_trait]
impl SnippetService for HasteClient {
    fn host(&self) -> &str {
        &self.host
    }

    async fn fetch(&self, key: &str) -> Result<String> {
        let url = format!("{}/raw/{}", self.host, key);
        tracing::debug!("GET {}", url);

        let response = self.send(self.client.get(&url)).await?;

        // Status is not interpreted: error pages come back as content.
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Fetch of {} returned status {}", url, status);
        }

        let body = Self::read_body(response).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    async fn upload_bytes(&self, content: &[u8]) -> Result<UploadResult> {
        let url = format!("{}/documents", self.host);
        tracing::debug!("POST {} ({} bytes)", url, content.len());

        let response = self
            .send(self.client.post(&url).body(content.to_vec()))
            .await?;
        let body = Self::read_body(response).await?;

        let result = parse_upload_response(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse upload response: {}\nBody: {}",
                e,
                String::from_utf8_lossy(&body)
            );
            e
        })?;

        if result.exceeds_max_length() {
            tracing::warn!("Upload of {} bytes rejected as too large", content.len());
            return Err(Error::PayloadTooLarge);
        }

        Ok(result)
    }
}
