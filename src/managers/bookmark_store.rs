//! Bookmark store — the write and point-read path.
//!
//! Implements `BookmarkStoreTrait`: create/update/delete/get-by-id over
//! the `bookmarks` and `bookmark_tags` tables, backed by SQLite via
//! `rusqlite`. Every write wraps the bookmark row and its tag rows in a
//! single transaction so they commit or roll back together.

use rusqlite::{params, Connection, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::services::validator::ValidBookmark;
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;

/// Trait defining the storage operations. Callers pass only validated
/// records; the store never re-checks field rules.
pub trait BookmarkStoreTrait {
    fn create(&mut self, valid: &ValidBookmark) -> Result<Bookmark, BookmarkError>;
    fn update(&mut self, id: i64, valid: &ValidBookmark) -> Result<Bookmark, BookmarkError>;
    fn delete(&mut self, id: i64) -> Result<(), BookmarkError>;
    fn get_by_id(&self, id: i64) -> Result<Bookmark, BookmarkError>;
}

/// Bookmark store backed by a SQLite connection.
pub struct BookmarkStore<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkStore<'a> {
    /// Creates a new `BookmarkStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Fetches a bookmark's tags in insertion order.
    fn tags_for(conn: &Connection, id: i64) -> Result<Vec<String>, BookmarkError> {
        let mut stmt =
            conn.prepare("SELECT tag FROM bookmark_tags WHERE bookmark_id = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![id], |row| row.get(0))?;
        let mut tags = Vec::new();
        for tag in rows {
            tags.push(tag?);
        }
        Ok(tags)
    }
}

impl<'a> BookmarkStoreTrait for BookmarkStore<'a> {
    /// Inserts the bookmark row and one tag row per normalized tag,
    /// atomically. Returns the fully populated record.
    fn create(&mut self, valid: &ValidBookmark) -> Result<Bookmark, BookmarkError> {
        let now = Self::now();
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO bookmarks (url, title, description, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![valid.url, valid.title, valid.description, now],
        )?;
        let id = tx.last_insert_rowid();

        for tag in &valid.tags {
            tx.execute(
                "INSERT INTO bookmark_tags (bookmark_id, tag) VALUES (?1, ?2)",
                params![id, tag],
            )?;
        }
        tx.commit()?;

        tracing::debug!(id, tags = valid.tags.len(), "created bookmark");
        Ok(Bookmark {
            id,
            url: valid.url.clone(),
            title: valid.title.clone(),
            description: valid.description.clone(),
            created_at: now,
            tags: valid.tags.clone(),
        })
    }

    /// Overwrites url/title/description and replaces the whole tag set
    /// (delete-all-then-reinsert), atomically. `created_at` is re-read
    /// from the committed row and preserved, never refreshed.
    fn update(&mut self, id: i64, valid: &ValidBookmark) -> Result<Bookmark, BookmarkError> {
        let tx = self.conn.unchecked_transaction()?;

        let created_at: i64 = match tx
            .query_row(
                "SELECT created_at FROM bookmarks WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?
        {
            Some(ts) => ts,
            // Transaction rolls back on drop; nothing was touched.
            None => return Err(BookmarkError::NotFound(id)),
        };

        tx.execute(
            "UPDATE bookmarks SET url = ?1, title = ?2, description = ?3 WHERE id = ?4",
            params![valid.url, valid.title, valid.description, id],
        )?;
        tx.execute(
            "DELETE FROM bookmark_tags WHERE bookmark_id = ?1",
            params![id],
        )?;
        for tag in &valid.tags {
            tx.execute(
                "INSERT INTO bookmark_tags (bookmark_id, tag) VALUES (?1, ?2)",
                params![id, tag],
            )?;
        }
        tx.commit()?;

        tracing::debug!(id, tags = valid.tags.len(), "updated bookmark");
        Ok(Bookmark {
            id,
            url: valid.url.clone(),
            title: valid.title.clone(),
            description: valid.description.clone(),
            created_at,
            tags: valid.tags.clone(),
        })
    }

    /// Removes the bookmark row; the foreign-key cascade removes its tag
    /// rows. Zero rows affected signals NotFound.
    fn delete(&mut self, id: i64) -> Result<(), BookmarkError> {
        let affected = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id));
        }
        tracing::debug!(id, "deleted bookmark");
        Ok(())
    }

    /// Point lookup with the tag set attached.
    fn get_by_id(&self, id: i64) -> Result<Bookmark, BookmarkError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, url, title, description, created_at FROM bookmarks WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Bookmark {
                        id: row.get(0)?,
                        url: row.get(1)?,
                        title: row.get(2)?,
                        description: row.get(3)?,
                        created_at: row.get(4)?,
                        tags: Vec::new(),
                    })
                },
            )
            .optional()?;

        match row {
            Some(mut bookmark) => {
                bookmark.tags = Self::tags_for(self.conn, id)?;
                Ok(bookmark)
            }
            None => Err(BookmarkError::NotFound(id)),
        }
    }
}
