//! Chapter navigation
//!
//! Chapter numbers inside a collection's declared range are not
//! guaranteed contiguous; some collections follow an external canonical
//! numbering with gaps. Navigation therefore walks the number space one
//! candidate at a time, probing the store for existence, bounded both by
//! the declared range and by a probe budget so a single navigation never
//! triggers an unbounded burst of probes.

mod session;

use tracing::debug;

pub use session::{LoadKey, NavigationState};

use crate::model::ChapterRange;
use crate::store::{chapter_path, ContentStore};

/// Default probe budget per navigation
pub const DEFAULT_MAX_PROBE: u32 = 5;

/// Direction of a chapter navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn step(&self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// One navigation request, consumed by [`resolve_adjacent`]
#[derive(Debug, Clone)]
pub struct NavigationQuery {
    pub collection: String,
    pub current: i64,
    pub direction: Direction,
    pub max_probe: u32,
}

impl NavigationQuery {
    pub fn new(collection: impl Into<String>, current: i64, direction: Direction) -> Self {
        Self {
            collection: collection.into(),
            current,
            direction,
            max_probe: DEFAULT_MAX_PROBE,
        }
    }

    pub fn with_max_probe(mut self, max_probe: u32) -> Self {
        self.max_probe = max_probe;
        self
    }

    pub async fn resolve<S: ContentStore + ?Sized>(
        &self,
        store: &S,
        range: ChapterRange,
    ) -> Option<i64> {
        resolve_adjacent(
            store,
            &self.collection,
            self.current,
            self.direction,
            range,
            self.max_probe,
        )
        .await
    }
}

/// Find the next existing chapter adjacent to `current`.
///
/// Starting one step away from `current`, each candidate is checked
/// against the declared range first; a candidate outside the range ends
/// the walk immediately, without a probe. Candidates inside the range
/// are probed for existence, skipping gaps, for at most `max_probe`
/// probes. `current` itself is never re-examined.
///
/// The only outcomes are a resolved chapter number or `None`; probe
/// transport failures read as "missing" and the walk continues.
pub async fn resolve_adjacent<S: ContentStore + ?Sized>(
    store: &S,
    collection: &str,
    current: i64,
    direction: Direction,
    range: ChapterRange,
    max_probe: u32,
) -> Option<i64> {
    let step = direction.step();
    let mut candidate = current + step;

    for _ in 0..max_probe {
        if !range.contains(candidate) {
            debug!(
                "Navigation from {} in {:?} hit range boundary at {}",
                current, direction, candidate
            );
            return None;
        }

        if store.exists(&chapter_path(collection, candidate)).await {
            debug!("Resolved chapter {} -> {}", current, candidate);
            return Some(candidate);
        }

        candidate += step;
    }

    debug!(
        "Navigation from {} in {:?} exhausted probe budget {}",
        current, direction, max_probe
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryContentStore;

    fn store_with_chapters(collection: &str, chapters: &[i64]) -> MemoryContentStore {
        let mut store = MemoryContentStore::new();
        for n in chapters {
            store.insert(
                chapter_path(collection, n),
                format!("sutraId: {}\nnumber: {}", collection, n),
            );
        }
        store
    }

    #[tokio::test]
    async fn test_adjacent_chapter_found_immediately() {
        let store = store_with_chapters("agama", &[1, 2, 3]);
        let range = ChapterRange::new(1, 3);

        let next = resolve_adjacent(&store, "agama", 1, Direction::Forward, range, 5).await;
        assert_eq!(next, Some(2));

        let prev = resolve_adjacent(&store, "agama", 2, Direction::Backward, range, 5).await;
        assert_eq!(prev, Some(1));
    }

    #[tokio::test]
    async fn test_gaps_are_skipped() {
        // Exists only for {5, 9} within [1, 10]
        let store = store_with_chapters("agama", &[5, 9]);
        let range = ChapterRange::new(1, 10);

        let next = resolve_adjacent(&store, "agama", 4, Direction::Forward, range, 5).await;
        assert_eq!(next, Some(5));
    }

    #[tokio::test]
    async fn test_probe_budget_exhausted() {
        // From 5 going forward with budget 3, candidates are 6, 7, 8;
        // chapter 9 exists but is outside the budget.
        let store = store_with_chapters("agama", &[5, 9]);
        let range = ChapterRange::new(1, 10);

        let next = resolve_adjacent(&store, "agama", 5, Direction::Forward, range, 3).await;
        assert_eq!(next, None);
        assert_eq!(store.probe_count(), 3);
    }

    #[tokio::test]
    async fn test_boundary_returns_none_without_probing() {
        let store = store_with_chapters("agama", &[1, 2, 3]);
        let range = ChapterRange::new(1, 3);

        let next = resolve_adjacent(&store, "agama", 3, Direction::Forward, range, 5).await;
        assert_eq!(next, None);

        let prev = resolve_adjacent(&store, "agama", 1, Direction::Backward, range, 5).await;
        assert_eq!(prev, None);

        assert_eq!(store.probe_count(), 0);
    }

    #[tokio::test]
    async fn test_result_never_outside_range() {
        let store = store_with_chapters("agama", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let range = ChapterRange::new(3, 4); // declared range [3, 6]

        for current in 3..=6 {
            for direction in [Direction::Forward, Direction::Backward] {
                if let Some(found) =
                    resolve_adjacent(&store, "agama", current, direction, range, 5).await
                {
                    assert!(range.contains(found), "resolved {} out of range", found);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_probe_transport_failure_reads_as_missing() {
        let mut store = store_with_chapters("agama", &[1, 3]);
        store.fail(chapter_path("agama", 2));
        let range = ChapterRange::new(1, 3);

        // Probe of 2 fails at transport level; the walk continues to 3
        let next = resolve_adjacent(&store, "agama", 1, Direction::Forward, range, 5).await;
        assert_eq!(next, Some(3));
    }

    #[tokio::test]
    async fn test_query_resolve() {
        let store = store_with_chapters("agama", &[5, 9]);
        let range = ChapterRange::new(1, 10);

        let query = NavigationQuery::new("agama", 5, Direction::Forward).with_max_probe(4);
        assert_eq!(query.resolve(&store, range).await, Some(9));
    }
}
