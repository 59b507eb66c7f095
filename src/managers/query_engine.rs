//! Query engine — the filtered, paginated read path.
//!
//! Builds the tag-joined list query over the store's tables. The total
//! count is computed independently of the page window so pagination
//! metadata stays correct when the caller asks for an out-of-range page.

use rusqlite::{params, Connection};

use crate::types::bookmark::{Bookmark, BookmarkPage, ListFilter, Page};
use crate::types::errors::BookmarkError;

/// Read-only query engine backed by a SQLite connection.
pub struct QueryEngine<'a> {
    conn: &'a Connection,
}

impl<'a> QueryEngine<'a> {
    /// Creates a new `QueryEngine` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Lists bookmarks matching the filter, newest first, windowed by page.
    ///
    /// Ordering is `created_at` descending with ties broken by id
    /// descending, so same-second inserts come back in reverse insertion
    /// order. An out-of-range page yields empty `items` with `total` and
    /// `total_pages` still correct.
    pub fn list(&self, filter: &ListFilter, page: Page) -> Result<BookmarkPage, BookmarkError> {
        if page.number < 1 {
            return Err(BookmarkError::Validation(
                "Page number must be at least 1".to_string(),
            ));
        }
        if page.size < 1 {
            return Err(BookmarkError::Validation(
                "Page size must be at least 1".to_string(),
            ));
        }

        // Tag filter is exact set membership against the lower-cased value.
        let tag = filter.tag.as_ref().map(|t| t.to_lowercase());

        let total: i64 = match &tag {
            Some(t) => self.conn.query_row(
                "SELECT COUNT(*) FROM bookmarks \
                 WHERE id IN (SELECT bookmark_id FROM bookmark_tags WHERE tag = ?1)",
                params![t],
                |row| row.get(0),
            ),
            None => self
                .conn
                .query_row("SELECT COUNT(*) FROM bookmarks", [], |row| row.get(0)),
        }?;

        let limit = page.size as i64;
        let offset = (page.number as i64 - 1) * limit;

        let mut stmt = match &tag {
            Some(_) => self.conn.prepare(
                "SELECT id, url, title, description, created_at FROM bookmarks \
                 WHERE id IN (SELECT bookmark_id FROM bookmark_tags WHERE tag = ?1) \
                 ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3",
            ),
            None => self.conn.prepare(
                "SELECT id, url, title, description, created_at FROM bookmarks \
                 ORDER BY created_at DESC, id DESC LIMIT ?1 OFFSET ?2",
            ),
        }?;

        let row_to_bookmark = |row: &rusqlite::Row| -> rusqlite::Result<Bookmark> {
            Ok(Bookmark {
                id: row.get(0)?,
                url: row.get(1)?,
                title: row.get(2)?,
                description: row.get(3)?,
                created_at: row.get(4)?,
                tags: Vec::new(),
            })
        };

        let rows = match &tag {
            Some(t) => stmt.query_map(params![t, limit, offset], row_to_bookmark),
            None => stmt.query_map(params![limit, offset], row_to_bookmark),
        }?;

        let mut items = Vec::new();
        for row in rows {
            let mut bookmark = row?;
            bookmark.tags = self.tags_for(bookmark.id)?;
            items.push(bookmark);
        }

        // Ceiling division; 0 pages when the catalogue is empty.
        let total_pages = (total + limit - 1) / limit;

        Ok(BookmarkPage {
            items,
            page: page.number,
            limit: page.size,
            total,
            total_pages,
        })
    }

    /// Fetches a bookmark's tags in insertion order (empty vec, never null).
    fn tags_for(&self, id: i64) -> Result<Vec<String>, BookmarkError> {
        let mut stmt = self
            .conn
            .prepare("SELECT tag FROM bookmark_tags WHERE bookmark_id = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![id], |row| row.get(0))?;
        let mut tags = Vec::new();
        for tag in rows {
            tags.push(tag?);
        }
        Ok(tags)
    }
}
