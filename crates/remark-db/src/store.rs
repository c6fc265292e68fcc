use anyhow::Result;
use chrono::{DateTime, Duration, SubsecRound, Utc};

use remark_types::models::{Comment, ListFilter, NewComment};

/// Persistence contract shared by every backend.
///
/// Calls are blocking. Async callers should run them on
/// `tokio::task::spawn_blocking`.
pub trait CommentStore: Send + Sync {
    fn list(&self, filter: &ListFilter) -> Result<Vec<Comment>>;

    fn create(&self, new: NewComment) -> Result<Comment>;

    fn get_by_id(&self, id: i64) -> Result<Option<Comment>>;

    /// Replaces the text. Returns `None` when no comment has this id.
    fn update(&self, id: i64, text: &str) -> Result<Option<Comment>>;

    /// Returns `false` when no comment has this id.
    fn delete(&self, id: i64) -> Result<bool>;
}

/// Current time at the precision both backends store.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Next `updated_at` for a record last touched at `previous`. Always strictly
/// later than `previous`, even if the clock has not advanced.
pub fn touch(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
