//! Unit tests for the error enum: Display messages, the adapter-facing
//! kind discriminator, and conversion from engine errors.

use linkstash::types::errors::BookmarkError;

#[test]
fn validation_display_is_the_message() {
    let err = BookmarkError::Validation("Title is required".to_string());
    assert_eq!(err.to_string(), "Title is required");
}

#[test]
fn not_found_display() {
    let err = BookmarkError::NotFound(42);
    assert_eq!(err.to_string(), "Bookmark not found: 42");
}

#[test]
fn storage_display() {
    let err = BookmarkError::Storage("disk I/O error".to_string());
    assert_eq!(err.to_string(), "Bookmark database error: disk I/O error");
}

#[test]
fn kind_discriminators_are_stable() {
    assert_eq!(BookmarkError::Validation(String::new()).kind(), "validation");
    assert_eq!(BookmarkError::NotFound(1).kind(), "not_found");
    assert_eq!(BookmarkError::Storage(String::new()).kind(), "storage");
}

#[test]
fn implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(BookmarkError::NotFound(7));
    assert!(err.source().is_none());
}

#[test]
fn rusqlite_errors_convert_to_storage() {
    let err: BookmarkError = rusqlite::Error::QueryReturnedNoRows.into();
    assert_eq!(err.kind(), "storage");
}
