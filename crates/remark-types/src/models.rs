use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored comment. `id`, `page` and `created_at` never change after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for inserting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub page: Option<String>,
}

/// Selection and window applied by a store listing.
///
/// Filters run first, then the `created_at DESC, id DESC` ordering, then
/// `offset` and `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub page: Option<String>,
    pub search: Option<String>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            page: None,
            search: None,
            limit: crate::api::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
