//! Structural validation rules for the two document shapes

use serde_yaml::Value;

use super::{SchemaError, Violation};
use crate::model::Tradition;

/// Validate a decoded collection metadata document
pub fn validate_sutra_meta(value: &Value) -> Result<(), SchemaError> {
    let mut check = Checker::new();

    if value.as_mapping().is_none() {
        check.violation("$", "document must be a mapping");
        return check.finish();
    }

    check.optional_string(value, "schemaVersion");

    if let Some(id) = check.required_string(value, "id") {
        if !is_slug(id) {
            check.violation("id", "must be a lowercase slug (a-z, 0-9, hyphen)");
        }
    }

    check.required_string(value, "title");
    check.optional_string(value, "titleEn");

    if let Some(tradition) = check.required_string(value, "tradition") {
        if !Tradition::NAMES.contains(&tradition) {
            check.violation(
                "tradition",
                format!("must be one of: {}", Tradition::NAMES.join(", ")),
            );
        }
    }

    check.required_string(value, "translator");
    check.required_string(value, "translatorAttribution");
    check.required_string(value, "source");
    check.required_string(value, "sourceAttribution");
    check.optional_string(value, "description");

    match value.get("chapters") {
        Some(v) => match v.as_i64() {
            Some(n) if n >= 0 => {}
            Some(_) => check.violation("chapters", "must be non-negative"),
            None => check.violation("chapters", "must be an integer"),
        },
        None => check.violation("chapters", "required field is missing"),
    }

    check.optional_int(value, "startChapter");
    check.optional_int(value, "defaultChapter");
    check.optional_string(value, "coverImage");

    check.finish()
}

/// Validate a decoded chapter content document
pub fn validate_chapter(value: &Value) -> Result<(), SchemaError> {
    let mut check = Checker::new();

    if value.as_mapping().is_none() {
        check.violation("$", "document must be a mapping");
        return check.finish();
    }

    check.optional_string(value, "schemaVersion");
    check.required_string(value, "sutraId");

    // The identifier may be an integer or a string (compound numbers
    // like "604-1" occur in canonically numbered collections).
    match value.get("number") {
        Some(v) if v.as_i64().is_some() || v.as_str().is_some() => {}
        Some(_) => check.violation("number", "must be an integer or a string"),
        None => check.violation("number", "required field is missing"),
    }

    check.optional_int(value, "volume");
    check.optional_string(value, "volumeTitle");
    check.required_string(value, "title");
    check.required_string(value, "originalText");
    check.optional_string(value, "translation");
    check.optional_string(value, "practiceInsights");
    check.optional_string(value, "transcript");
    check.optional_string(value, "sourceAttribution");

    for key in ["podcastUrl", "videoUrl", "audioUrl", "pdfUrl"] {
        if let Some(url) = check.optional_string(value, key) {
            if !is_absolute_uri(url) {
                check.violation(key, "must be an absolute URI");
            }
        }
    }
    for key in ["podcastTitle", "videoTitle", "audioTitle", "pdfTitle"] {
        check.optional_string(value, key);
    }

    if let Some(items) = check.optional_sequence(value, "annotations") {
        for (i, item) in items.iter().enumerate() {
            let at = |field: &str| format!("annotations[{}].{}", i, field);
            check.required_uint_at(&at("paragraph"), item.get("paragraph"));
            check.required_string_at(&at("text"), item.get("text"));
            // Attribution is a hard requirement, not a convention
            check.required_string_at(&at("source"), item.get("source"));
        }
    }

    if let Some(items) = check.optional_sequence(value, "illustrations") {
        for (i, item) in items.iter().enumerate() {
            let at = |field: &str| format!("illustrations[{}].{}", i, field);
            if let Some(url) = check.required_string_at(&at("url"), item.get("url")) {
                if url.is_empty() {
                    check.violation(at("url"), "must not be empty");
                }
            }
            // Alt text is a hard accessibility requirement
            check.required_string_at(&at("alt"), item.get("alt"));
            check.optional_string_at(&at("caption"), item.get("caption"));
        }
    }

    if let Some(items) = check.optional_sequence(value, "detailedExplanation") {
        for (i, item) in items.iter().enumerate() {
            let at = |field: &str| format!("detailedExplanation[{}].{}", i, field);
            check.required_string_at(&at("original"), item.get("original"));
            check.optional_string_at(&at("translation"), item.get("translation"));
            check.optional_string_at(&at("commentary"), item.get("commentary"));
            check.optional_string_at(&at("commentaryTranslation"), item.get("commentaryTranslation"));
        }
    }

    check.finish()
}

/// Collects violations across one validation pass
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    fn violation(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }

    fn required_string<'a>(&mut self, value: &'a Value, key: &str) -> Option<&'a str> {
        self.required_string_at(key, value.get(key))
    }

    fn required_string_at<'a>(&mut self, path: &str, field: Option<&'a Value>) -> Option<&'a str> {
        match field {
            Some(v) => match v.as_str() {
                Some(s) => Some(s),
                None => {
                    self.violation(path, "must be a string");
                    None
                }
            },
            None => {
                self.violation(path, "required field is missing");
                None
            }
        }
    }

    fn optional_string<'a>(&mut self, value: &'a Value, key: &str) -> Option<&'a str> {
        self.optional_string_at(key, value.get(key))
    }

    fn optional_string_at<'a>(&mut self, path: &str, field: Option<&'a Value>) -> Option<&'a str> {
        match field {
            Some(v) => match v.as_str() {
                Some(s) => Some(s),
                None => {
                    self.violation(path, "must be a string");
                    None
                }
            },
            None => None,
        }
    }

    fn optional_int(&mut self, value: &Value, key: &str) {
        if let Some(v) = value.get(key) {
            if v.as_i64().is_none() {
                self.violation(key, "must be an integer");
            }
        }
    }

    fn required_uint_at(&mut self, path: &str, field: Option<&Value>) {
        match field {
            Some(v) => match v.as_i64() {
                Some(n) if n >= 0 => {}
                Some(_) => self.violation(path, "must be non-negative"),
                None => self.violation(path, "must be an integer"),
            },
            None => self.violation(path, "required field is missing"),
        }
    }

    fn optional_sequence<'a>(&mut self, value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
        match value.get(key) {
            Some(v) => match v.as_sequence() {
                Some(seq) => Some(seq),
                None => {
                    self.violation(key, "must be a list");
                    None
                }
            },
            None => None,
        }
    }

    fn finish(self) -> Result<(), SchemaError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError {
                violations: self.violations,
            })
        }
    }
}

/// Lowercase slug: `[a-z0-9]+(-[a-z0-9]+)*`
fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Absolute URI with an explicit scheme, e.g. `https://...`
fn is_absolute_uri(s: &str) -> bool {
    match s.split_once("://") {
        Some((scheme, rest)) => {
            !rest.is_empty()
                && scheme
                    .chars()
                    .next()
                    .map(|c| c.is_ascii_alphabetic())
                    .unwrap_or(false)
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_pattern() {
        assert!(is_slug("heart-sutra"));
        assert!(is_slug("samyukta-agama"));
        assert!(is_slug("x"));
        assert!(!is_slug("Heart-Sutra"));
        assert!(!is_slug("-leading"));
        assert!(!is_slug("trailing-"));
        assert!(!is_slug("double--hyphen"));
        assert!(!is_slug(""));
        assert!(!is_slug("has space"));
    }

    #[test]
    fn test_absolute_uri() {
        assert!(is_absolute_uri("https://example.com/podcast/ep1"));
        assert!(is_absolute_uri("http://example.com"));
        assert!(!is_absolute_uri("not-a-valid-url"));
        assert!(!is_absolute_uri("/images/relative.jpg"));
        assert!(!is_absolute_uri("://no-scheme"));
        assert!(!is_absolute_uri("https://"));
    }

    #[test]
    fn test_non_mapping_document_rejected() {
        let value: Value = serde_yaml::from_str("- just\n- a\n- list").unwrap();
        assert!(validate_sutra_meta(&value).is_err());
        assert!(validate_chapter(&value).is_err());
    }

    #[test]
    fn test_all_violations_collected() {
        // Missing several required fields at once; every one is reported
        let value: Value = serde_yaml::from_str("schemaVersion: '1.0'").unwrap();
        let err = validate_chapter(&value).unwrap_err();
        let paths: Vec<&str> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert!(paths.contains(&"sutraId"));
        assert!(paths.contains(&"number"));
        assert!(paths.contains(&"title"));
        assert!(paths.contains(&"originalText"));
    }
}
