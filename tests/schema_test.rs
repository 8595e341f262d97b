//! Schema acceptance and rejection tests
//!
//! Fixtures mirror real content documents; a document either satisfies
//! its schema in full or the whole load is rejected.

use sutra_reader::schema::{decode_chapter, decode_sutra_meta};
use sutra_reader::{LoadError, Tradition};

const VALID_META: &str = r#"
schemaVersion: "1.0"
id: heart-sutra
title: "般若波羅蜜多心經"
titleEn: "Heart Sutra"
tradition: Mahayana
translator: "玄奘法師"
translatorAttribution: "唐三藏法師玄奘奉詔譯"
source: "大正新修大藏經第8冊 No.251"
sourceAttribution: "Taishō Tripitaka, Vol. 8, No. 251"
description: "濃縮般若思想精華"
chapters: 1
"#;

const VALID_CHAPTER: &str = r#"
schemaVersion: "1.0"
sutraId: heart-sutra
number: 1
title: "般若波羅蜜多心經"
originalText: "觀自在菩薩，行深般若波羅蜜多時，照見五蘊皆空，度一切苦厄。"
translation: "觀世音菩薩在修行甚深般若智慧時，清楚地照見五蘊的本質都是空性。"
annotations:
  - paragraph: 1
    text: "「五蘊」指色、受、想、行、識五種構成人的要素。"
    source: "印順導師《般若經講記》"
practiceInsights: "修行般若智慧的關鍵在於「照見」。"
illustrations:
  - url: /images/heart-sutra/avalokitesvara.jpg
    alt: "觀自在菩薩行深般若波羅蜜多時之圖像"
    caption: "觀世音菩薩入甚深禪定"
podcastUrl: "https://example.com/podcast/heart-sutra-ep1"
transcript: "觀自在菩薩，行深般若波羅蜜多時。"
"#;

fn assert_rejected_at(result: Result<impl std::fmt::Debug, LoadError>, path: &str) {
    match result {
        Err(LoadError::Schema(e)) => {
            assert!(
                e.violations.iter().any(|v| v.path == path),
                "expected violation at {}, got {:?}",
                path,
                e.violations
            );
        }
        other => panic!("expected schema rejection, got {:?}", other),
    }
}

#[test]
fn valid_metadata_is_accepted() {
    let meta = decode_sutra_meta(VALID_META).unwrap();
    assert_eq!(meta.id, "heart-sutra");
    assert_eq!(meta.tradition, Tradition::Mahayana);
    assert_eq!(meta.title_en.as_deref(), Some("Heart Sutra"));
    assert_eq!(meta.chapters, 1);
}

#[test]
fn metadata_missing_id_is_rejected() {
    let doc = VALID_META.replace("id: heart-sutra\n", "");
    assert_rejected_at(decode_sutra_meta(&doc), "id");
}

#[test]
fn metadata_missing_translator_is_rejected() {
    let doc = VALID_META.replace("translator: \"玄奘法師\"\n", "");
    assert_rejected_at(decode_sutra_meta(&doc), "translator");
}

#[test]
fn metadata_with_uppercase_id_is_rejected() {
    let doc = VALID_META.replace("id: heart-sutra", "id: Heart-Sutra");
    assert_rejected_at(decode_sutra_meta(&doc), "id");
}

#[test]
fn metadata_missing_translator_attribution_is_rejected() {
    let doc = VALID_META.replace("translatorAttribution: \"唐三藏法師玄奘奉詔譯\"\n", "");
    assert_rejected_at(decode_sutra_meta(&doc), "translatorAttribution");
}

#[test]
fn metadata_with_unknown_tradition_is_rejected() {
    let doc = VALID_META.replace("tradition: Mahayana", "tradition: Unknown");
    assert_rejected_at(decode_sutra_meta(&doc), "tradition");
}

#[test]
fn metadata_with_negative_chapter_count_is_rejected() {
    let doc = VALID_META.replace("chapters: 1", "chapters: -3");
    assert_rejected_at(decode_sutra_meta(&doc), "chapters");
}

#[test]
fn valid_chapter_is_accepted() {
    let chapter = decode_chapter(VALID_CHAPTER).unwrap();
    assert_eq!(chapter.sutra_id, "heart-sutra");
    assert_eq!(chapter.number.as_int(), Some(1));
    let annotations = chapter.annotations.unwrap();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].paragraph, 1);
    let illustrations = chapter.illustrations.unwrap();
    assert_eq!(illustrations[0].caption.as_deref(), Some("觀世音菩薩入甚深禪定"));
}

#[test]
fn chapter_with_only_required_fields_is_accepted() {
    let doc = r#"
sutraId: heart-sutra
number: 1
title: "般若波羅蜜多心經"
originalText: "觀自在菩薩"
"#;
    let chapter = decode_chapter(doc).unwrap();
    assert!(chapter.translation.is_none());
    assert!(chapter.annotations.is_none());
    assert!(chapter.illustrations.is_none());
    assert!(chapter.podcast_url.is_none());
}

#[test]
fn chapter_missing_sutra_id_is_rejected() {
    let doc = VALID_CHAPTER.replace("sutraId: heart-sutra\n", "");
    assert_rejected_at(decode_chapter(&doc), "sutraId");
}

#[test]
fn chapter_missing_original_text_is_rejected() {
    let doc = r#"
sutraId: heart-sutra
number: 1
title: "般若波羅蜜多心經"
translation: "觀世音菩薩"
"#;
    assert_rejected_at(decode_chapter(doc), "originalText");
}

#[test]
fn chapter_with_invalid_podcast_url_is_rejected() {
    let doc = VALID_CHAPTER.replace(
        "podcastUrl: \"https://example.com/podcast/heart-sutra-ep1\"",
        "podcastUrl: not-a-valid-url",
    );
    assert_rejected_at(decode_chapter(&doc), "podcastUrl");
}

#[test]
fn annotation_without_source_is_rejected() {
    let doc = r#"
sutraId: heart-sutra
number: 1
title: "般若波羅蜜多心經"
originalText: "觀自在菩薩"
annotations:
  - paragraph: 1
    text: "「五蘊」指色、受、想、行、識。"
"#;
    assert_rejected_at(decode_chapter(doc), "annotations[0].source");
}

#[test]
fn illustration_without_alt_is_rejected() {
    let doc = r#"
sutraId: heart-sutra
number: 1
title: "般若波羅蜜多心經"
originalText: "觀自在菩薩"
illustrations:
  - url: /images/heart-sutra/image.jpg
"#;
    assert_rejected_at(decode_chapter(doc), "illustrations[0].alt");
}

#[test]
fn chapter_with_string_number_is_accepted() {
    let doc = r#"
sutraId: samyukta-agama
number: "604-1"
title: "阿育王因緣"
originalText: "如是我聞。"
"#;
    let chapter = decode_chapter(doc).unwrap();
    assert_eq!(chapter.number.to_string(), "604-1");
    assert_eq!(chapter.number.as_int(), None);
}

#[test]
fn chapter_with_detailed_explanation_is_accepted() {
    let doc = r#"
sutraId: heart-sutra
number: 1
title: "般若波羅蜜多心經"
originalText: "觀自在菩薩"
detailedExplanation:
  - original: "觀自在菩薩"
    translation: "The bodhisattva of compassion"
    commentary: "觀照自心而得自在"
"#;
    let chapter = decode_chapter(doc).unwrap();
    let explanation = chapter.detailed_explanation.unwrap();
    assert_eq!(explanation.len(), 1);
    assert!(explanation[0].commentary_translation.is_none());
}

#[test]
fn detailed_explanation_without_original_is_rejected() {
    let doc = r#"
sutraId: heart-sutra
number: 1
title: "般若波羅蜜多心經"
originalText: "觀自在菩薩"
detailedExplanation:
  - commentary: "觀照自心而得自在"
"#;
    assert_rejected_at(decode_chapter(doc), "detailedExplanation[0].original");
}

#[test]
fn empty_document_is_a_decode_failure() {
    assert!(matches!(decode_chapter(""), Err(LoadError::Decode(_))));
    assert!(matches!(decode_sutra_meta("   \n"), Err(LoadError::Decode(_))));
}

#[test]
fn malformed_yaml_is_a_decode_failure() {
    let doc = "title: [unclosed";
    assert!(matches!(decode_chapter(doc), Err(LoadError::Decode(_))));
}

#[test]
fn every_violation_is_reported_in_one_pass() {
    let doc = r#"
sutraId: heart-sutra
number: 1
title: "般若波羅蜜多心經"
originalText: "觀自在菩薩"
podcastUrl: bad-url
annotations:
  - paragraph: 1
    text: "text"
illustrations:
  - url: /images/a.jpg
"#;
    match decode_chapter(doc) {
        Err(LoadError::Schema(e)) => {
            let paths: Vec<&str> = e.violations.iter().map(|v| v.path.as_str()).collect();
            assert!(paths.contains(&"podcastUrl"));
            assert!(paths.contains(&"annotations[0].source"));
            assert!(paths.contains(&"illustrations[0].alt"));
        }
        other => panic!("expected schema rejection, got {:?}", other),
    }
}
