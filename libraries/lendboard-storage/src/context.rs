use crate::edits::{self, EditRow};
use async_trait::async_trait;
use lendboard_core::{EditStore, Result};
use sqlx::SqlitePool;

/// Edit store persisted in `SQLite`
#[derive(Clone)]
pub struct SqliteEditStore {
    pool: SqlitePool,
}

impl SqliteEditStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Every stored override, most recently written first
    pub async fn list(&self) -> crate::error::Result<Vec<EditRow>> {
        edits::list_edits(&self.pool).await
    }
}

#[async_trait]
impl EditStore for SqliteEditStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(edits::get_edit(&self.pool, key).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        edits::set_edit(&self.pool, key, value)
            .await
            .map_err(|e| e.into_write_failure())
    }
}
