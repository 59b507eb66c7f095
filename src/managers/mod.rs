// Storage-backed components. Each borrows the database connection with a
// lifetime parameter and is created on demand via `db.connection()`.

pub mod bookmark_store;
pub mod query_engine;
pub mod repository;

pub use bookmark_store::{BookmarkStore, BookmarkStoreTrait};
pub use query_engine::QueryEngine;
pub use repository::BookmarkRepository;
