//! Typed content models
//!
//! Decoded, schema-checked views of the two document shapes served by the
//! content store: collection metadata (`meta.yml`) and chapter content
//! (`chapter-{n}.yml`). Instances are immutable after load; a navigation
//! replaces the loaded chapter wholesale.

pub mod chapter;
pub mod sutra;

pub use chapter::{Annotation, Chapter, ChapterNumber, DetailedExplanation, Illustration};
pub use sutra::{ChapterRange, SutraMeta, Tradition};
