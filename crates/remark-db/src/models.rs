//! Database row types — these map directly to SQLite rows.
//! Converted into `remark_types` models once timestamps are parsed.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

use remark_types::models::Comment;

pub struct CommentRow {
    pub id: i64,
    pub text: String,
    pub page: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<CommentRow> for Comment {
    type Error = anyhow::Error;

    fn try_from(row: CommentRow) -> Result<Self> {
        let created_at = parse_timestamp(&row.created_at)
            .with_context(|| format!("Corrupt created_at on comment {}", row.id))?;
        let updated_at = parse_timestamp(&row.updated_at)
            .with_context(|| format!("Corrupt updated_at on comment {}", row.id))?;

        Ok(Comment {
            id: row.id,
            text: row.text,
            page: row.page,
            created_at,
            updated_at,
        })
    }
}

/// Fixed-width RFC 3339, so string order in SQL matches time order.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid timestamp '{}'", raw))?;
    Ok(parsed.with_timezone(&Utc))
}
