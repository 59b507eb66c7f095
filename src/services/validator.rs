//! Field validation for candidate bookmark records.
//!
//! Pure — no side effects, no storage access. Runs before every write,
//! identically for create and update (updates validate the full
//! replacement payload, not a diff).

use std::collections::HashSet;

use url::Url;

use crate::types::bookmark::{BookmarkDraft, MAX_DESCRIPTION_CHARS, MAX_TAGS, MAX_TITLE_CHARS};
use crate::types::errors::BookmarkError;

/// A candidate that passed validation, with tags normalized to lower case
/// (insertion order preserved). Only this type reaches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBookmark {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Checks a candidate record against the field rules.
///
/// Returns the normalized record on success, or
/// `BookmarkError::Validation` with a client-facing message on the first
/// rule the candidate breaks.
pub fn validate(draft: &BookmarkDraft) -> Result<ValidBookmark, BookmarkError> {
    if draft.url.is_empty() {
        return Err(BookmarkError::Validation("URL is required".to_string()));
    }
    if Url::parse(&draft.url).is_err() {
        return Err(BookmarkError::Validation("Invalid URL format".to_string()));
    }

    if draft.title.is_empty() {
        return Err(BookmarkError::Validation("Title is required".to_string()));
    }
    if draft.title.chars().count() > MAX_TITLE_CHARS {
        return Err(BookmarkError::Validation(format!(
            "Title cannot exceed {} characters",
            MAX_TITLE_CHARS
        )));
    }

    if let Some(desc) = &draft.description {
        if desc.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(BookmarkError::Validation(format!(
                "Description cannot exceed {} characters",
                MAX_DESCRIPTION_CHARS
            )));
        }
    }

    let tags = match &draft.tags {
        Some(raw) => {
            if raw.len() > MAX_TAGS {
                return Err(BookmarkError::Validation(format!(
                    "Maximum {} tags allowed",
                    MAX_TAGS
                )));
            }
            let normalized: Vec<String> = raw.iter().map(|t| t.to_lowercase()).collect();
            let unique: HashSet<&String> = normalized.iter().collect();
            if unique.len() != normalized.len() {
                return Err(BookmarkError::Validation("Tags must be unique".to_string()));
            }
            normalized
        }
        None => Vec::new(),
    };

    Ok(ValidBookmark {
        url: draft.url.clone(),
        title: draft.title.clone(),
        description: draft.description.clone(),
        tags,
    })
}
