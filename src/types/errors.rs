use std::fmt;

/// Errors produced by the bookmark repository and its components.
#[derive(Debug)]
pub enum BookmarkError {
    /// The candidate record violates a field rule. Carries a
    /// human-readable message suitable for the client.
    Validation(String),
    /// The operation targeted an identifier with no live bookmark row.
    NotFound(i64),
    /// The underlying storage engine failed. Fatal at this layer;
    /// never retried here.
    Storage(String),
}

impl BookmarkError {
    /// Stable discriminator used by transport adapters to pick a
    /// status class without parsing the message.
    pub fn kind(&self) -> &'static str {
        match self {
            BookmarkError::Validation(_) => "validation",
            BookmarkError::NotFound(_) => "not_found",
            BookmarkError::Storage(_) => "storage",
        }
    }
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::Validation(msg) => write!(f, "{}", msg),
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::Storage(msg) => write!(f, "Bookmark database error: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

impl From<rusqlite::Error> for BookmarkError {
    fn from(err: rusqlite::Error) -> Self {
        BookmarkError::Storage(err.to_string())
    }
}
