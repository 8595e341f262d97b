//! Chapter content model

use serde::{Deserialize, Serialize};

/// One addressable chapter within a collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Schema version for forward compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,

    /// Collection this chapter belongs to
    pub sutra_id: String,

    /// Chapter identifier as carried by the document. Kept in the
    /// document's own form; navigation steps numerically.
    pub number: ChapterNumber,

    /// Volume grouping, where the source text has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_title: Option<String>,

    /// Chapter title
    pub title: String,

    /// Original-language text
    pub original_text: String,

    /// Modern translation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,

    /// Per-paragraph annotations; every annotation carries its source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,

    /// Practice guidance text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_insights: Option<String>,

    /// Illustrations; every illustration carries alt text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illustrations: Option<Vec<Illustration>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcast_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcast_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_title: Option<String>,

    /// Free-text transcript of attached media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_attribution: Option<String>,

    /// Structured per-paragraph explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_explanation: Option<Vec<DetailedExplanation>>,
}

/// Annotation on one paragraph. The `source` attribution is mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    /// 1-based paragraph index the annotation applies to
    pub paragraph: u32,
    pub text: String,
    pub source: String,
}

/// Illustration reference. The `alt` text is mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Illustration {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// One paragraph of structured explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedExplanation {
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary_translation: Option<String>,
}

/// Chapter identifier as it appears in a document.
///
/// Most collections number chapters with plain integers, but some carry
/// compound identifiers like `"604-1"`. The document's own form is
/// preserved; ordering compares numerically when both sides are numeric
/// and falls back to lexicographic comparison otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChapterNumber {
    Int(i64),
    Text(String),
}

impl ChapterNumber {
    /// Numeric value, if the identifier is an integer or parses as one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ChapterNumber::Int(n) => Some(*n),
            ChapterNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for ChapterNumber {
    fn from(n: i64) -> Self {
        ChapterNumber::Int(n)
    }
}

impl std::fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChapterNumber::Int(n) => write!(f, "{}", n),
            ChapterNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Ord for ChapterNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self.as_int(), other.as_int()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl PartialOrd for ChapterNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
