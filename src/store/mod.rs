//! Content store access
//!
//! The store serves YAML documents addressed by logical path:
//! `content/{collectionId}/meta.yml` for collection metadata and
//! `content/{collectionId}/chapter-{n}.yml` for chapter content.
//!
//! Two operations: a full fetch returning the raw document, and a
//! lightweight existence probe. The probe never fails; any transport
//! problem is absorbed to `false` so navigation can keep walking.

pub mod http;
pub mod memory;

use async_trait::async_trait;

pub use http::HttpContentStore;
pub use memory::MemoryContentStore;

/// Fetch failures. NotFound is distinct from transport problems so
/// callers can treat a missing document as a normal outcome.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Document not found")]
    NotFound,

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Read access to the content store
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Retrieve the raw text of the document at `path`.
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;

    /// Check whether a document exists without retrieving its body.
    /// Transport failures are reported as `false`, never as an error.
    async fn exists(&self, path: &str) -> bool;
}

/// Path of a collection's metadata document
pub fn meta_path(collection: &str) -> String {
    format!("content/{}/meta.yml", collection)
}

/// Path of one chapter document
pub fn chapter_path(collection: &str, chapter: impl std::fmt::Display) -> String {
    format!("content/{}/chapter-{}.yml", collection, chapter)
}
