//! Document schemas and validation
//!
//! Two document shapes are recognized: collection metadata and chapter
//! content. The caller selects which schema applies; nothing is sniffed.
//! Validation is structural and collects every violated constraint, so a
//! rejected document can be diagnosed in one pass. A document either
//! satisfies its schema in full or the whole load is rejected.

mod validate;

use serde_yaml::Value;
use tracing::warn;

use crate::error::LoadError;
use crate::model::{Chapter, SutraMeta};

pub use validate::{validate_chapter, validate_sutra_meta};

/// One violated schema constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending field, e.g. `annotations[0].source`
    pub path: String,
    pub message: String,
}

impl Violation {
    pub(crate) fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Structural validation failure carrying every violated constraint
#[derive(Debug, Clone)]
pub struct SchemaError {
    pub violations: Vec<Violation>,
}

impl std::error::Error for SchemaError {}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} violation(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "; {}", v)?;
        }
        Ok(())
    }
}

/// Parse raw YAML into a document value. Empty input is a decode
/// failure, not an empty document.
pub fn parse_yaml(raw: &str) -> Result<Value, LoadError> {
    if raw.trim().is_empty() {
        return Err(LoadError::Decode("YAML content is empty".to_string()));
    }
    serde_yaml::from_str(raw).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Decode and validate a collection metadata document
pub fn decode_sutra_meta(raw: &str) -> Result<SutraMeta, LoadError> {
    let value = parse_yaml(raw)?;

    if let Err(e) = validate_sutra_meta(&value) {
        warn!("Sutra metadata rejected: {}", e);
        return Err(e.into());
    }

    serde_yaml::from_value(value).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Decode and validate a chapter content document
pub fn decode_chapter(raw: &str) -> Result<Chapter, LoadError> {
    let value = parse_yaml(raw)?;

    if let Err(e) = validate_chapter(&value) {
        warn!("Chapter rejected: {}", e);
        return Err(e.into());
    }

    serde_yaml::from_value(value).map_err(|e| LoadError::Decode(e.to_string()))
}
