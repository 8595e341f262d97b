//! Schema-validated loading and chapter navigation for YAML scripture
//! collections.
//!
//! A collection (sutra) is a named body of chapters served as YAML
//! documents: `content/{id}/meta.yml` describes the collection and
//! `content/{id}/chapter-{n}.yml` holds one chapter. This crate loads
//! those documents, validates them structurally before handing typed
//! models to the view layer, and resolves next/previous navigation
//! across chapter number spaces that may have gaps.
//!
//! The pieces compose leaf to root:
//!
//! - [`store`]: fetches raw documents and answers lightweight existence
//!   probes, over HTTP or from memory
//! - [`schema`]: validates decoded documents against one of the two
//!   recognized shapes, collecting every violated constraint
//! - [`nav`]: walks the chapter number space to find the adjacent
//!   existing chapter, bounded by the declared range and a probe budget
//! - [`client`]: the façade the view layer talks to

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod nav;
pub mod schema;
pub mod store;

pub use client::{ChapterInfo, ReaderClient};
pub use config::ReaderConfig;
pub use error::LoadError;
pub use model::{
    Annotation, Chapter, ChapterNumber, ChapterRange, DetailedExplanation, Illustration,
    SutraMeta, Tradition,
};
pub use nav::{resolve_adjacent, Direction, NavigationQuery, NavigationState, DEFAULT_MAX_PROBE};
pub use schema::{SchemaError, Violation};
pub use store::{ContentStore, FetchError, HttpContentStore, MemoryContentStore};
