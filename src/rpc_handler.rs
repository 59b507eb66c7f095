//! RPC method handler for the newline-delimited JSON protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches method calls to the repository via the `App`
//! struct. Malformed parameters (wrong JSON types, missing fields) surface
//! as the `validation` error kind; the repository supplies `not_found` and
//! `storage`.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::repository::BookmarkRepository;
use crate::types::bookmark::{BookmarkDraft, ListFilter, Page, DEFAULT_PAGE_SIZE};
use crate::types::errors::BookmarkError;

/// Reads an optional positive-integer parameter, falling back to `default`
/// when absent. A present-but-malformed value is a caller error.
fn opt_u32(params: &Value, key: &str, default: u32) -> Result<u32, BookmarkError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                BookmarkError::Validation(format!("Invalid {}: must be a positive integer", key))
            }),
    }
}

/// Reads the required bookmark identifier parameter.
fn require_id(params: &Value) -> Result<i64, BookmarkError> {
    params
        .get("id")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| BookmarkError::Validation("Missing or invalid id".to_string()))
}

/// Deserializes the create/update payload. Unknown keys (such as `id` on
/// update) are ignored; type mismatches become validation failures.
fn parse_draft(params: &Value) -> Result<BookmarkDraft, BookmarkError> {
    serde_json::from_value(params.clone()).map_err(|e| BookmarkError::Validation(e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, BookmarkError> {
    serde_json::to_value(value).map_err(|e| BookmarkError::Storage(e.to_string()))
}

/// Dispatch a method call to the appropriate repository operation.
///
/// Returns `Ok(Value)` on success or `Err(BookmarkError)`; the server maps
/// the error kind to the transport's status semantics.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, BookmarkError> {
    match method {
        "bookmark.create" => {
            let draft = parse_draft(params)?;
            let a = app
                .lock()
                .map_err(|e| BookmarkError::Storage(e.to_string()))?;
            let mut repo = BookmarkRepository::new(a.db.connection());
            let bookmark = repo.create(&draft)?;
            to_json(&bookmark)
        }
        "bookmark.update" => {
            let id = require_id(params)?;
            let draft = parse_draft(params)?;
            let a = app
                .lock()
                .map_err(|e| BookmarkError::Storage(e.to_string()))?;
            let mut repo = BookmarkRepository::new(a.db.connection());
            let bookmark = repo.update(id, &draft)?;
            to_json(&bookmark)
        }
        "bookmark.delete" => {
            let id = require_id(params)?;
            let a = app
                .lock()
                .map_err(|e| BookmarkError::Storage(e.to_string()))?;
            let mut repo = BookmarkRepository::new(a.db.connection());
            repo.delete(id)?;
            Ok(json!({"ok": true}))
        }
        "bookmark.get" => {
            let id = require_id(params)?;
            let a = app
                .lock()
                .map_err(|e| BookmarkError::Storage(e.to_string()))?;
            let repo = BookmarkRepository::new(a.db.connection());
            let bookmark = repo.get(id)?;
            to_json(&bookmark)
        }
        "bookmark.list" => {
            let filter = ListFilter {
                tag: params
                    .get("tag")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string()),
            };
            let page = Page {
                number: opt_u32(params, "page", 1)?,
                size: opt_u32(params, "limit", DEFAULT_PAGE_SIZE)?,
            };
            let a = app
                .lock()
                .map_err(|e| BookmarkError::Storage(e.to_string()))?;
            let repo = BookmarkRepository::new(a.db.connection());
            let result = repo.list(&filter, page)?;
            Ok(json!({
                "items": to_json(&result.items)?,
                "pagination": {
                    "page": result.page,
                    "limit": result.limit,
                    "total": result.total,
                    "totalPages": result.total_pages,
                }
            }))
        }
        "ping" => Ok(json!({"pong": true})),
        _ => Err(BookmarkError::Validation(format!(
            "unknown method: {}",
            method
        ))),
    }
}
