use std::sync::Arc;

use remark_db::CommentStore;
use remark_types::api::DEFAULT_MAX_TEXT_LEN;

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Arc<dyn CommentStore>,
    pub max_text_len: usize,
}

impl AppStateInner {
    pub fn new(store: Arc<dyn CommentStore>) -> Self {
        Self {
            store,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }

    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    /// Run a blocking store call off the async runtime.
    pub async fn run<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&dyn CommentStore) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || f(store.as_ref()))
            .await
            .map_err(|e| ApiError::Store(anyhow::anyhow!("spawn_blocking join error: {}", e)))?
            .map_err(ApiError::Store)
    }
}
