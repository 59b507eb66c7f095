use serde::{Deserialize, Serialize};

/// Maximum number of tags a single bookmark may carry.
pub const MAX_TAGS: usize = 5;

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Default page size used by adapters when the caller omits one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A saved bookmark as returned by reads: the persisted row plus its
/// tag set in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    /// UNIX seconds, assigned at creation and never refreshed by updates.
    pub created_at: i64,
    pub tags: Vec<String>,
}

/// Candidate payload for create and update. Updates are full replacements,
/// so the shape is identical for both operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Page window for list queries. Both fields are 1-based and must be ≥ 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Filter for list queries. A present tag restricts results to bookmarks
/// carrying that exact tag (matched after lower-casing, not substring).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFilter {
    pub tag: Option<String>,
}

/// One page of list results with window-independent count metadata.
#[derive(Debug, Clone, Serialize)]
pub struct BookmarkPage {
    pub items: Vec<Bookmark>,
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: i64,
}
