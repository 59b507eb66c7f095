//! Unit tests for the validator — every field rule, both sides of each
//! boundary. The validator is pure, so no database is needed.

use rstest::rstest;

use linkstash::services::validator::validate;
use linkstash::types::bookmark::BookmarkDraft;

fn draft(url: &str, title: &str) -> BookmarkDraft {
    BookmarkDraft {
        url: url.to_string(),
        title: title.to_string(),
        description: None,
        tags: None,
    }
}

#[test]
fn minimal_valid_draft_passes() {
    let valid = validate(&draft("https://example.com", "Example")).unwrap();
    assert_eq!(valid.url, "https://example.com");
    assert_eq!(valid.title, "Example");
    assert_eq!(valid.description, None);
    assert!(valid.tags.is_empty());
}

#[rstest]
#[case("", "URL is required")]
#[case("not a url", "Invalid URL format")]
#[case("/relative/path", "Invalid URL format")]
#[case("example.com", "Invalid URL format")]
fn bad_urls_are_rejected(#[case] url: &str, #[case] expected: &str) {
    let err = validate(&draft(url, "Title")).unwrap_err();
    assert_eq!(err.to_string(), expected);
    assert_eq!(err.kind(), "validation");
}

#[test]
fn empty_title_is_rejected() {
    let err = validate(&draft("https://example.com", "")).unwrap_err();
    assert_eq!(err.to_string(), "Title is required");
}

#[test]
fn title_length_boundary() {
    let ok = "t".repeat(200);
    assert!(validate(&draft("https://example.com", &ok)).is_ok());

    let too_long = "t".repeat(201);
    let err = validate(&draft("https://example.com", &too_long)).unwrap_err();
    assert_eq!(err.to_string(), "Title cannot exceed 200 characters");
}

#[test]
fn description_length_boundary() {
    let mut d = draft("https://example.com", "Title");
    d.description = Some("d".repeat(500));
    assert!(validate(&d).is_ok());

    d.description = Some("d".repeat(501));
    let err = validate(&d).unwrap_err();
    assert_eq!(err.to_string(), "Description cannot exceed 500 characters");
}

#[test]
fn five_tags_allowed_six_rejected() {
    let mut d = draft("https://example.com", "Title");
    d.tags = Some(vec!["a", "b", "c", "d", "e"].into_iter().map(String::from).collect());
    assert!(validate(&d).is_ok());

    d.tags = Some(vec!["a", "b", "c", "d", "e", "f"].into_iter().map(String::from).collect());
    let err = validate(&d).unwrap_err();
    assert_eq!(err.to_string(), "Maximum 5 tags allowed");
}

#[test]
fn case_insensitive_duplicate_tags_rejected() {
    let mut d = draft("https://example.com", "Title");
    d.tags = Some(vec!["A".to_string(), "a".to_string()]);
    let err = validate(&d).unwrap_err();
    assert_eq!(err.to_string(), "Tags must be unique");
}

#[test]
fn tags_are_lowercased_in_insertion_order() {
    let mut d = draft("https://example.com", "Title");
    d.tags = Some(vec!["Rust".to_string(), "WebDev".to_string(), "cli".to_string()]);
    let valid = validate(&d).unwrap();
    assert_eq!(valid.tags, vec!["rust", "webdev", "cli"]);
}

/// Updates validate the same full-replacement payload as creates; the
/// function is the single shared gate, so a draft rejected for create is
/// rejected for update with the identical message.
#[test]
fn validation_has_no_side_effects() {
    let d = draft("https://example.com", "Title");
    let first = validate(&d).unwrap();
    let second = validate(&d).unwrap();
    assert_eq!(first, second);
}
