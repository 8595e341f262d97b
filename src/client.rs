//! Reader client
//!
//! Ties the store, schema and navigation together: the view layer asks
//! the client for validated metadata and chapter content, for the table
//! of contents, and for adjacent-chapter resolution. The client keeps no
//! state between calls; each load is independent and replaced wholesale.

use futures::future::join_all;
use tracing::{debug, info};

use crate::config::ReaderConfig;
use crate::error::LoadError;
use crate::model::{Chapter, ChapterNumber, SutraMeta};
use crate::nav::{resolve_adjacent, Direction, DEFAULT_MAX_PROBE};
use crate::schema::{decode_chapter, decode_sutra_meta, parse_yaml};
use crate::store::{chapter_path, meta_path, ContentStore, HttpContentStore};

/// Entry in the table of contents, gathered by a lenient bulk fetch
#[derive(Debug, Clone)]
pub struct ChapterInfo {
    pub number: ChapterNumber,
    pub title: String,
    pub volume: Option<i64>,
    pub volume_title: Option<String>,
}

pub struct ReaderClient<S: ContentStore> {
    store: S,
    max_probe: u32,
}

impl ReaderClient<HttpContentStore> {
    /// Client over an HTTP content store described by `config`
    pub fn from_config(config: &ReaderConfig) -> Result<Self, LoadError> {
        let store = HttpContentStore::new(config)?;
        Ok(Self {
            store,
            max_probe: config.max_probe,
        })
    }
}

impl<S: ContentStore> ReaderClient<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_probe: DEFAULT_MAX_PROBE,
        }
    }

    /// Override the per-navigation probe budget
    pub fn with_max_probe(mut self, max_probe: u32) -> Self {
        self.max_probe = max_probe;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load and validate one collection's metadata
    pub async fn load_sutra(&self, collection: &str) -> Result<SutraMeta, LoadError> {
        info!("Loading metadata for {}", collection);
        let raw = self.store.fetch(&meta_path(collection)).await?;
        decode_sutra_meta(&raw)
    }

    /// Load and validate one chapter
    pub async fn load_chapter(&self, collection: &str, chapter: i64) -> Result<Chapter, LoadError> {
        info!("Loading {} chapter {}", collection, chapter);
        let raw = self.store.fetch(&chapter_path(collection, chapter)).await?;
        decode_chapter(&raw)
    }

    /// Load metadata for a known list of collections. Any member that
    /// fails to load or validate rejects the whole catalog.
    pub async fn load_catalog(&self, collections: &[&str]) -> Result<Vec<SutraMeta>, LoadError> {
        let loads = collections.iter().map(|id| self.load_sutra(id));
        join_all(loads).await.into_iter().collect()
    }

    /// Table of contents over the collection's declared range.
    ///
    /// Lenient by design: chapters that are missing or unreadable are
    /// skipped rather than failing the listing, since the range may have
    /// gaps. Entries come back sorted by chapter number.
    pub async fn chapter_list(&self, meta: &SutraMeta) -> Vec<ChapterInfo> {
        let range = meta.chapter_range();
        let numbers: Vec<ChapterNumber> = (range.start()..=range.last())
            .map(ChapterNumber::from)
            .collect();

        let mut entries = self.fetch_chapter_infos(&meta.id, &numbers).await;
        entries.sort_by(|a, b| a.number.cmp(&b.number));
        entries
    }

    /// Table of contents for an explicit chapter list, e.g. collections
    /// with compound identifiers. The given order is preserved.
    pub async fn chapter_list_explicit(
        &self,
        collection: &str,
        numbers: &[ChapterNumber],
    ) -> Vec<ChapterInfo> {
        self.fetch_chapter_infos(collection, numbers).await
    }

    async fn fetch_chapter_infos(
        &self,
        collection: &str,
        numbers: &[ChapterNumber],
    ) -> Vec<ChapterInfo> {
        let fetches = numbers.iter().map(|n| async move {
            let raw = self
                .store
                .fetch(&chapter_path(collection, n))
                .await
                .ok()?;
            let value = parse_yaml(&raw).ok()?;

            let title = value.get("title")?.as_str()?.to_string();
            // Prefer the number the document carries; fall back to the
            // one it was requested under.
            let number = value
                .get("number")
                .and_then(|v| serde_yaml::from_value::<ChapterNumber>(v.clone()).ok())
                .unwrap_or_else(|| n.clone());

            Some(ChapterInfo {
                number,
                title,
                volume: value.get("volume").and_then(|v| v.as_i64()),
                volume_title: value
                    .get("volumeTitle")
                    .and_then(|v| v.as_str())
                    .map(String::from),
            })
        });

        let mut entries = Vec::new();
        for (n, entry) in numbers.iter().zip(join_all(fetches).await) {
            match entry {
                Some(info) => entries.push(info),
                None => debug!("Skipping unreadable chapter {} in {}", n, collection),
            }
        }
        entries
    }

    /// Next existing chapter after `current`, within the declared range
    pub async fn next_chapter(&self, meta: &SutraMeta, current: i64) -> Option<i64> {
        resolve_adjacent(
            &self.store,
            &meta.id,
            current,
            Direction::Forward,
            meta.chapter_range(),
            self.max_probe,
        )
        .await
    }

    /// Previous existing chapter before `current`, within the declared range
    pub async fn prev_chapter(&self, meta: &SutraMeta, current: i64) -> Option<i64> {
        resolve_adjacent(
            &self.store,
            &meta.id,
            current,
            Direction::Backward,
            meta.chapter_range(),
            self.max_probe,
        )
        .await
    }
}
