//! Client for hastebin-style text sharing services
//!
//! Uploads text or bytes to a hastebin server and fetches stored snippets
//! back by key.

pub mod client;
pub mod error;
pub mod models;

pub use client::{HasteClient, MockHasteClient, SnippetService};
pub use error::{Error, Result};
pub use models::{Config, UploadResult};
