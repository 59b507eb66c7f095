//! App core — central struct owning the database handle.
//!
//! `BookmarkRepository` is created on demand via `db.connection()` because
//! it borrows the connection with a lifetime parameter.

use std::sync::Arc;

use crate::database::connection::Database;

/// Central application struct. Owns the explicitly constructed database;
/// there is no process-wide singleton. Pass the instance to whatever
/// adapter needs it.
pub struct App {
    pub db: Arc<Database>,
}

impl App {
    /// Creates a new App, opening (or creating) the database at `db_path`
    /// and running schema migrations.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        Ok(Self { db })
    }

    /// Creates a new App backed by an in-memory database. For tests.
    pub fn in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open_in_memory()?);
        Ok(Self { db })
    }
}
