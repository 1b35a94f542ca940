//! Error handling and custom error types
//!
//! Every failure the client can hit while talking to a hastebin server maps
//! to exactly one variant here, built with thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("IO error reading response body: {0}")]
    Io(#[source] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Document exceeds the server's maximum length")]
    PayloadTooLarge,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
