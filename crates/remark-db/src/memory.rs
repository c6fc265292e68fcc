use std::cmp::Reverse;
use std::sync::Mutex;

use anyhow::{Result, anyhow};

use remark_types::models::{Comment, ListFilter, NewComment};

use crate::store::{self, CommentStore};

/// Process-local comment store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    comments: Vec<Comment>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_inner<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut MemoryInner) -> T,
    {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| anyhow!("Memory store lock poisoned: {}", e))?;
        Ok(f(&mut inner))
    }
}

impl CommentStore for MemoryStore {
    fn list(&self, filter: &ListFilter) -> Result<Vec<Comment>> {
        let needle = filter.search.as_deref().map(str::to_lowercase);

        self.with_inner(|inner| {
            let mut hits: Vec<Comment> = inner
                .comments
                .iter()
                .filter(|c| filter.page.is_none() || c.page == filter.page)
                .filter(|c| match &needle {
                    Some(needle) => c.text.to_lowercase().contains(needle.as_str()),
                    None => true,
                })
                .cloned()
                .collect();

            hits.sort_by_key(|c| Reverse((c.created_at, c.id)));

            hits.into_iter()
                .skip(filter.offset)
                .take(filter.limit)
                .collect()
        })
    }

    fn create(&self, new: NewComment) -> Result<Comment> {
        self.with_inner(|inner| {
            inner.last_id += 1;
            let now = store::now();
            let comment = Comment {
                id: inner.last_id,
                text: new.text,
                page: new.page,
                created_at: now,
                updated_at: now,
            };
            inner.comments.push(comment.clone());
            comment
        })
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Comment>> {
        self.with_inner(|inner| inner.comments.iter().find(|c| c.id == id).cloned())
    }

    fn update(&self, id: i64, text: &str) -> Result<Option<Comment>> {
        self.with_inner(|inner| {
            let comment = inner.comments.iter_mut().find(|c| c.id == id)?;
            comment.text = text.to_string();
            comment.updated_at = store::touch(comment.updated_at);
            Some(comment.clone())
        })
    }

    fn delete(&self, id: i64) -> Result<bool> {
        self.with_inner(|inner| {
            let before = inner.comments.len();
            inner.comments.retain(|c| c.id != id);
            inner.comments.len() != before
        })
    }
}
