//! Data models and configuration
//!
//! Defines the upload result returned by the hastebin `/documents` endpoint
//! and the environment-driven client configuration.

use crate::client::{HasteClient, SnippetService};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "https://hastebin.com";

/// Message the server sends instead of a key when a document is too big.
pub const MAX_LENGTH_MESSAGE: &str = "Document exceeds maximum length.";

/// Parsed body of a `POST /documents` response.
///
/// Both fields are optional on the wire and fall back to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub key: String,
    #[serde(rename = "message", default)]
    pub raw_message: String,
}

impl UploadResult {
    /// Full URL of the uploaded document on `client`'s host.
    ///
    /// The host and key are joined with a single `/` as-is; an empty key
    /// yields a link pointing at the host root.
    pub fn build_link<S: SnippetService + ?Sized>(&self, client: &S) -> String {
        format!("{}/{}", client.host(), self.key)
    }

    pub(crate) fn exceeds_max_length(&self) -> bool {
        self.raw_message == MAX_LENGTH_MESSAGE
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            std::env::var("HASTE_HOST").ok(),
            std::env::var("HASTE_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(host: Option<String>, timeout_secs: Option<String>) -> crate::Result<Self> {
        let timeout = match timeout_secs {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    crate::Error::Config(format!("HASTE_TIMEOUT_SECS is not a number: {}", raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            timeout,
        })
    }

    /// Build a network client for the configured host.
    pub fn client(&self) -> HasteClient {
        let client = HasteClient::new(self.host.clone());
        match self.timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }
}
