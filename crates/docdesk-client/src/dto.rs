//! Wire shapes of the content service REST API.

use serde::{Deserialize, Serialize};

use docdesk_core::error::AppError;

/// Single-entity response: `{"entry": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry<T> {
    /// The entity.
    pub entry: T,
}

/// Collection response: `{"list": {"pagination": {...}, "entries": [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    /// The page.
    pub list: ListPage<T>,
}

/// One page of a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPage<T> {
    /// Page entries.
    #[serde(default = "Vec::new")]
    pub entries: Vec<Entry<T>>,
    /// Paging information, absent on unpaged collections.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Paging information of a collection page.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Entries in this page.
    pub count: u64,
    /// Whether more pages follow.
    pub has_more_items: bool,
    /// Offset of this page.
    pub skip_count: u64,
}

impl<T> ListPage<T> {
    /// Offset of the next page, if there is one.
    pub fn next_skip(&self) -> Option<u64> {
        self.pagination
            .filter(|p| p.has_more_items && p.count > 0)
            .map(|p| p.skip_count + p.count)
    }
}

/// Body of a copy request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyRequest<'a> {
    /// Folder the node is copied into.
    pub target_parent_id: &'a str,
}

/// Map a failed response to an [`AppError`].
///
/// The body is kept verbatim as the message; the content service answers
/// with `{"error":{"statusCode":...,"briefSummary":...}}`.
pub fn status_error(status: u16, body: String) -> AppError {
    let message = if body.trim().is_empty() {
        format!("Content service responded with HTTP {status}")
    } else {
        body
    };
    AppError::from_status(status, message)
}
