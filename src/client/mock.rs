use super::SnippetService;
use crate::models::{UploadResult, MAX_LENGTH_MESSAGE};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Body a hastebin server sends for an unknown key.
const NOT_FOUND_BODY: &str = "{\"message\":\"Document not found.\"}";

/// In-memory stand-in for a hastebin server.
#[derive(Clone)]
pub struct MockHasteClient {
    documents: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    host: String,
    max_length: Option<usize>,
    upload_count: Arc<Mutex<usize>>,
    fetch_count: Arc<Mutex<usize>>,
}

impl MockHasteClient {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(HashMap::new())),
            host: "https://mock-haste.example.com".to_string(),
            max_length: None,
            upload_count: Arc::new(Mutex::new(0)),
            fetch_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    /// Reject uploads longer than `max_length` bytes the way the server does.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_document(self, key: String, content: Vec<u8>) -> Self {
        self.documents.lock().unwrap().insert(key, content);
        self
    }

    pub fn get_upload_count(&self) -> usize {
        *self.upload_count.lock().unwrap()
    }

    pub fn get_fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }

    pub fn get_documents(&self) -> HashMap<String, Vec<u8>> {
        self.documents.lock().unwrap().clone()
    }
}

impl Default for MockHasteClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnippetService for MockHasteClient {
    fn host(&self) -> &str {
        &self.host
    }

    async fn fetch(&self, key: &str) -> Result<String> {
        *self.fetch_count.lock().unwrap() += 1;

        let documents = self.documents.lock().unwrap();
        Ok(match documents.get(key) {
            Some(data) => String::from_utf8_lossy(data).into_owned(),
            None => NOT_FOUND_BODY.to_string(),
        })
    }

    async fn upload_bytes(&self, content: &[u8]) -> Result<UploadResult> {
        let mut count = self.upload_count.lock().unwrap();
        *count += 1;

        let response = match self.max_length {
            Some(max) if content.len() > max => UploadResult {
                key: String::new(),
                raw_message: MAX_LENGTH_MESSAGE.to_string(),
            },
            _ => {
                let key = format!("mock{}", *count);
                self.documents
                    .lock()
                    .unwrap()
                    .insert(key.clone(), content.to_vec());
                UploadResult {
                    key,
                    raw_message: String::new(),
                }
            }
        };

        if response.exceeds_max_length() {
            return Err(Error::PayloadTooLarge);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_upload_and_fetch() {
        let client = MockHasteClient::new();

        let result = client.upload_text("hello world").await.unwrap();
        assert_eq!(result.key, "mock1");
        assert_eq!(client.get_upload_count(), 1);

        let content = client.fetch(&result.key).await.unwrap();
        assert_eq!(content, "hello world");
        assert_eq!(client.get_fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_keys_are_unique() {
        let client = MockHasteClient::new();

        let first = client.upload_text("one").await.unwrap();
        let second = client.upload_text("two").await.unwrap();

        assert_ne!(first.key, second.key);
        assert_eq!(client.get_documents().len(), 2);
    }

    #[tokio::test]
    async fn test_mock_max_length() {
        let client = MockHasteClient::new().with_max_length(4);

        assert!(client.upload_text("four").await.is_ok());
        let err = client.upload_text("fives").await.unwrap_err();
        assert!(matches!(err, Error::PayloadTooLarge));
        assert_eq!(client.get_documents().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_missing_key_returns_not_found_body() {
        let client = MockHasteClient::new();
        let content = client.fetch("nope").await.unwrap();
        assert!(content.contains("Document not found."));
    }

    #[tokio::test]
    async fn test_mock_with_document_and_host() {
        let client = MockHasteClient::new()
            .with_host("https://paste.test".to_string())
            .with_document("seeded".to_string(), b"seed".to_vec());

        assert_eq!(client.fetch("seeded").await.unwrap(), "seed");

        let result = UploadResult {
            key: "seeded".to_string(),
            raw_message: String::new(),
        };
        assert_eq!(result.build_link(&client), "https://paste.test/seeded");
    }
}
