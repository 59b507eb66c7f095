// Shared type definitions used across the service.

pub mod bookmark;
pub mod errors;

pub use bookmark::{Bookmark, BookmarkDraft, BookmarkPage, ListFilter, Page};
pub use errors::BookmarkError;
