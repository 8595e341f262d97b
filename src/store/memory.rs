//! In-memory content store
//!
//! Backs tests and embedded use. Documents are inserted up front;
//! paths can be marked as failing to exercise transport-error handling.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ContentStore, FetchError};

#[derive(Default)]
pub struct MemoryContentStore {
    documents: HashMap<String, String>,
    failing: HashSet<String>,
    probes: AtomicUsize,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document at `path`
    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) {
        self.documents.insert(path.into(), body.into());
    }

    /// Make every access to `path` fail with a transport error
    pub fn fail(&mut self, path: impl Into<String>) {
        self.failing.insert(path.into());
    }

    /// Number of existence probes issued against this store
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        if self.failing.contains(path) {
            return Err(FetchError::Transport("simulated outage".to_string()));
        }
        self.documents
            .get(path)
            .cloned()
            .ok_or(FetchError::NotFound)
    }

    async fn exists(&self, path: &str) -> bool {
        self.probes.fetch_add(1, Ordering::Relaxed);
        if self.failing.contains(path) {
            // Transport failure reads as absent
            return false;
        }
        self.documents.contains_key(path)
    }
}
