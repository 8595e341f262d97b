//! Load-failure taxonomy
//!
//! Every failure in the loading pipeline resolves to a typed value the
//! caller can branch on. Transport problems, missing documents, decode
//! failures and schema violations stay distinct categories so the view
//! layer can report each one differently.

use crate::schema::SchemaError;
use crate::store::FetchError;

/// Errors surfaced by content loading operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    /// Network or storage unreachable, or a non-OK response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The requested document does not exist
    #[error("Document not found")]
    NotFound,

    /// The document was retrieved but is not well-formed YAML
    #[error("Decode error: {0}")]
    Decode(String),

    /// The document decoded but violates its schema
    #[error("Schema validation failed: {0}")]
    Schema(#[from] SchemaError),
}

impl From<FetchError> for LoadError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::NotFound => LoadError::NotFound,
            FetchError::Transport(msg) => LoadError::Transport(msg),
        }
    }
}

impl LoadError {
    /// Whether this failure means the document simply does not exist,
    /// as opposed to a load that went wrong.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound)
    }
}
