use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};

use remark_types::models::{Comment, ListFilter, NewComment};

use crate::Database;
use crate::models::{CommentRow, format_timestamp};
use crate::store::{self, CommentStore};

const SELECT_COLUMNS: &str = "SELECT id, text, page, created_at, updated_at FROM comments";

impl CommentStore for Database {
    fn list(&self, filter: &ListFilter) -> Result<Vec<Comment>> {
        self.with_conn(|conn| query_comments(conn, filter))
    }

    fn create(&self, new: NewComment) -> Result<Comment> {
        let now = store::now();
        let stamp = format_timestamp(&now);

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO comments (text, page, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
                params![new.text, new.page, stamp],
            )?;

            Ok(Comment {
                id: conn.last_insert_rowid(),
                text: new.text,
                page: new.page,
                created_at: now,
                updated_at: now,
            })
        })
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Comment>> {
        self.with_conn(|conn| query_comment(conn, id))
    }

    fn update(&self, id: i64, text: &str) -> Result<Option<Comment>> {
        self.with_conn(|conn| {
            let tx = conn.unchecked_transaction()?;

            let Some(current) = query_comment(&tx, id)? else {
                return Ok(None);
            };

            let updated_at = store::touch(current.updated_at);
            tx.execute(
                "UPDATE comments SET text = ?1, updated_at = ?2 WHERE id = ?3",
                params![text, format_timestamp(&updated_at), id],
            )?;
            tx.commit()?;

            Ok(Some(Comment {
                text: text.to_string(),
                updated_at,
                ..current
            }))
        })
    }

    fn delete(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM comments WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn query_comment(conn: &Connection, id: i64) -> Result<Option<Comment>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;

    let row = stmt.query_row([id], map_row).optional()?;

    row.map(Comment::try_from).transpose()
}

fn query_comments(conn: &Connection, filter: &ListFilter) -> Result<Vec<Comment>> {
    // instr() rather than LIKE so '%' and '_' in the search term match literally
    let mut stmt = conn.prepare(&format!(
        "{SELECT_COLUMNS}
         WHERE (?1 IS NULL OR page = ?1)
           AND (?2 IS NULL OR instr(unicode_lower(text), unicode_lower(?2)) > 0)
         ORDER BY created_at DESC, id DESC
         LIMIT ?3 OFFSET ?4"
    ))?;

    let rows = stmt
        .query_map(
            params![
                filter.page,
                filter.search,
                filter.limit as i64,
                filter.offset as i64,
            ],
            map_row,
        )?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rows.into_iter().map(Comment::try_from).collect()
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CommentRow> {
    Ok(CommentRow {
        id: row.get(0)?,
        text: row.get(1)?,
        page: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
