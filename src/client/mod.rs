//! Hastebin client for uploading and fetching snippets
//!
//! [`SnippetService`] is the seam callers program against; [`HasteClient`]
//! talks to a real server and [`MockHasteClient`] keeps documents in memory.

pub mod http;
pub mod mock;

pub use http::HasteClient;
pub use mock::MockHasteClient;

use crate::models::UploadResult;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SnippetService: Send + Sync {
    /// Base URL every request is issued against.
    fn host(&self) -> &str;

    /// Retrieve the raw content stored under `key`.
    async fn fetch(&self, key: &str) -> Result<String>;

    /// Store `content` and return the key assigned by the server.
    async fn upload_bytes(&self, content: &[u8]) -> Result<UploadResult>;

    async fn upload_text(&self, content: &str) -> Result<UploadResult> {
        self.upload_bytes(content.as_bytes()).await
    }
}
