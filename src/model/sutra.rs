//! Collection metadata model

use serde::{Deserialize, Serialize};

/// Metadata for one collection of chapters (a sutra)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SutraMeta {
    /// Schema version for forward compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,

    /// Unique lowercase-slug identifier, e.g. `heart-sutra`
    pub id: String,

    /// Title in the original language
    pub title: String,

    /// English title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,

    /// Buddhist tradition this collection belongs to
    pub tradition: Tradition,

    /// Translator name
    pub translator: String,

    /// Full translator attribution line
    pub translator_attribution: String,

    /// Source text reference
    pub source: String,

    /// Full source attribution line
    pub source_attribution: String,

    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Total number of chapters declared by the collection
    pub chapters: u32,

    /// First chapter number; collections may start at 0, 1 or an
    /// arbitrary canonical offset. Defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_chapter: Option<i64>,

    /// Chapter to open when none is requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_chapter: Option<i64>,

    /// Cover image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl SutraMeta {
    /// First chapter number of the declared range
    pub fn start_chapter(&self) -> i64 {
        self.start_chapter.unwrap_or(1)
    }

    /// Inclusive declared chapter range of this collection
    pub fn chapter_range(&self) -> ChapterRange {
        ChapterRange::new(self.start_chapter(), self.chapters)
    }
}

/// Buddhist traditions recognized by the metadata schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tradition {
    Mahayana,
    Theravada,
    Vajrayana,
    #[serde(rename = "Early Buddhism")]
    EarlyBuddhism,
    Other,
}

impl Tradition {
    /// All values accepted by the schema, in their wire form
    pub const NAMES: [&'static str; 5] = [
        "Mahayana",
        "Theravada",
        "Vajrayana",
        "Early Buddhism",
        "Other",
    ];
}

impl std::fmt::Display for Tradition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tradition::Mahayana => write!(f, "Mahayana"),
            Tradition::Theravada => write!(f, "Theravada"),
            Tradition::Vajrayana => write!(f, "Vajrayana"),
            Tradition::EarlyBuddhism => write!(f, "Early Buddhism"),
            Tradition::Other => write!(f, "Other"),
        }
    }
}

/// Inclusive range of chapter numbers declared by a collection.
///
/// The identifier space inside the range is not guaranteed contiguous;
/// individual chapters may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterRange {
    start: i64,
    count: u32,
}

impl ChapterRange {
    pub fn new(start: i64, count: u32) -> Self {
        Self { start, count }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last chapter number in the range. For an empty range this is
    /// `start - 1`, so `contains` holds for nothing.
    pub fn last(&self) -> i64 {
        self.start + self.count as i64 - 1
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, chapter: i64) -> bool {
        chapter >= self.start && chapter <= self.last()
    }
}
