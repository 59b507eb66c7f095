//! Repository façade — the only interface adapters are permitted to call.
//!
//! Composes the validator, store, and query engine: writes validate first
//! and only touch storage on success; reads pass straight through.

use rusqlite::Connection;

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::managers::query_engine::QueryEngine;
use crate::services::validator;
use crate::types::bookmark::{Bookmark, BookmarkDraft, BookmarkPage, ListFilter, Page};
use crate::types::errors::BookmarkError;

/// Bookmark repository backed by a SQLite connection.
pub struct BookmarkRepository<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkRepository<'a> {
    /// Creates a new `BookmarkRepository` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Validates the candidate and persists it. Returns the created record
    /// with its engine-assigned id and timestamp.
    pub fn create(&mut self, draft: &BookmarkDraft) -> Result<Bookmark, BookmarkError> {
        let valid = validator::validate(draft)?;
        BookmarkStore::new(self.conn).create(&valid)
    }

    /// Validates the full replacement payload and overwrites the record,
    /// replacing its whole tag set. `created_at` is preserved.
    pub fn update(&mut self, id: i64, draft: &BookmarkDraft) -> Result<Bookmark, BookmarkError> {
        let valid = validator::validate(draft)?;
        BookmarkStore::new(self.conn).update(id, &valid)
    }

    /// Removes the bookmark and, via the cascade, all of its tag rows.
    pub fn delete(&mut self, id: i64) -> Result<(), BookmarkError> {
        BookmarkStore::new(self.conn).delete(id)
    }

    /// Point lookup with the tag set attached.
    pub fn get(&self, id: i64) -> Result<Bookmark, BookmarkError> {
        BookmarkStore::new(self.conn).get_by_id(id)
    }

    /// Filtered, paginated listing, newest first.
    pub fn list(&self, filter: &ListFilter, page: Page) -> Result<BookmarkPage, BookmarkError> {
        QueryEngine::new(self.conn).list(filter, page)
    }
}
