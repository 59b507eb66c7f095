//! Unit tests for the repository façade — the composed behavior callers
//! actually see: validation gating writes, round-trips, and the
//! delete-then-filter property.

use linkstash::database::Database;
use linkstash::managers::repository::BookmarkRepository;
use linkstash::types::bookmark::{BookmarkDraft, ListFilter, Page};
use linkstash::types::errors::BookmarkError;

fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

fn draft(url: &str, title: &str, tags: &[&str]) -> BookmarkDraft {
    BookmarkDraft {
        url: url.to_string(),
        title: title.to_string(),
        description: None,
        tags: if tags.is_empty() {
            None
        } else {
            Some(tags.iter().map(|t| t.to_string()).collect())
        },
    }
}

#[test]
fn create_then_get_round_trips_with_normalized_tags() {
    let db = setup();
    let mut repo = BookmarkRepository::new(db.connection());

    let mut d = draft("https://example.com", "Example", &["Rust", "WebDev"]);
    d.description = Some("a catalogue entry".to_string());
    let created = repo.create(&d).unwrap();

    let fetched = repo.get(created.id).unwrap();
    assert_eq!(fetched.url, "https://example.com");
    assert_eq!(fetched.title, "Example");
    assert_eq!(fetched.description, Some("a catalogue entry".to_string()));
    assert_eq!(fetched.tags, vec!["rust", "webdev"]);
}

#[test]
fn invalid_create_persists_nothing() {
    let db = setup();
    let mut repo = BookmarkRepository::new(db.connection());

    let err = repo
        .create(&draft("https://example.com", "T", &["a", "b", "c", "d", "e", "f"]))
        .unwrap_err();
    assert!(matches!(err, BookmarkError::Validation(_)));

    let page = repo.list(&ListFilter::default(), Page::default()).unwrap();
    assert_eq!(page.total, 0);
}

#[test]
fn invalid_update_leaves_record_untouched() {
    let db = setup();
    let mut repo = BookmarkRepository::new(db.connection());
    let created = repo.create(&draft("https://example.com", "Keep", &["tag"])).unwrap();

    let err = repo.update(created.id, &draft("not a url", "Keep", &[])).unwrap_err();
    assert_eq!(err.kind(), "validation");

    let fetched = repo.get(created.id).unwrap();
    assert_eq!(fetched.url, "https://example.com");
    assert_eq!(fetched.tags, vec!["tag"]);
}

#[test]
fn update_round_trips_and_preserves_created_at() {
    let db = setup();
    let mut repo = BookmarkRepository::new(db.connection());
    let created = repo.create(&draft("https://old.example", "Old", &["old"])).unwrap();

    let mut replacement = draft("https://new.example", "New", &["New", "Tags"]);
    replacement.description = Some("replaced".to_string());
    let updated = repo.update(created.id, &replacement).unwrap();
    assert_eq!(updated.created_at, created.created_at);

    let fetched = repo.get(created.id).unwrap();
    assert_eq!(fetched.url, "https://new.example");
    assert_eq!(fetched.title, "New");
    assert_eq!(fetched.description, Some("replaced".to_string()));
    assert_eq!(fetched.tags, vec!["new", "tags"]);
    assert_eq!(fetched.created_at, created.created_at);
}

#[test]
fn update_nonexistent_id_is_not_found_and_adds_nothing() {
    let db = setup();
    let mut repo = BookmarkRepository::new(db.connection());

    let err = repo.update(404, &draft("https://example.com", "X", &[])).unwrap_err();
    assert!(matches!(err, BookmarkError::NotFound(404)));

    let page = repo.list(&ListFilter::default(), Page::default()).unwrap();
    assert_eq!(page.total, 0);
}

#[test]
fn delete_removes_record_from_filtered_lists() {
    let db = setup();
    let mut repo = BookmarkRepository::new(db.connection());

    let doomed = repo
        .create(&draft("https://doomed.example", "Doomed", &["shared"]))
        .unwrap();
    let survivor = repo
        .create(&draft("https://survivor.example", "Survivor", &["shared"]))
        .unwrap();

    repo.delete(doomed.id).unwrap();

    let filter = ListFilter { tag: Some("shared".to_string()) };
    let page = repo.list(&filter, Page::default()).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, survivor.id);

    // No orphan tag rows survive the cascade
    let orphans: i64 = db
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM bookmark_tags WHERE bookmark_id = ?1",
            [doomed.id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);
}

#[test]
fn delete_nonexistent_id_is_not_found() {
    let db = setup();
    let mut repo = BookmarkRepository::new(db.connection());
    assert!(matches!(repo.delete(9), Err(BookmarkError::NotFound(9))));
}
