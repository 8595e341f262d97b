//! Stale-load guard
//!
//! Rapid repeated navigation can leave several loads in flight at once.
//! In-flight requests are not cancelled; instead each load is keyed by
//! the chapter it was issued for, and a completed load whose key no
//! longer matches the latest request is discarded. The last request
//! wins regardless of completion order.

use tracing::debug;

/// Identity of one pending load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadKey {
    pub collection: String,
    pub chapter: i64,
}

/// Tracks the latest requested chapter across navigations
#[derive(Debug, Default)]
pub struct NavigationState {
    latest: Option<LoadKey>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new load request and return its key. Any load started
    /// earlier becomes stale from this point on.
    pub fn begin(&mut self, collection: impl Into<String>, chapter: i64) -> LoadKey {
        let key = LoadKey {
            collection: collection.into(),
            chapter,
        };
        self.latest = Some(key.clone());
        key
    }

    /// Whether `key` still identifies the latest request
    pub fn is_current(&self, key: &LoadKey) -> bool {
        self.latest.as_ref() == Some(key)
    }

    /// Accept a completed load only if it is still the latest request.
    /// A stale completion is dropped and `None` is returned.
    pub fn complete<T>(&self, key: &LoadKey, result: T) -> Option<T> {
        if self.is_current(key) {
            Some(result)
        } else {
            debug!(
                "Discarding stale load for {} chapter {}",
                key.collection, key.chapter
            );
            None
        }
    }
}
