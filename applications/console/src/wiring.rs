/// Builds the configured record source and edit store
use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, Result};
use lendboard_client::{FileRecordSource, HttpRecordSource, SourceConfig};
use lendboard_core::{EditStore, LoadState, RecordSource, UserListLoader, UserRecord};
use lendboard_storage::SqliteEditStore;
use std::sync::Arc;

/// File source when `source.file` is set, HTTP otherwise
pub fn build_source(config: &ConsoleConfig) -> Result<Arc<dyn RecordSource>> {
    if let Some(path) = &config.source.file {
        tracing::info!("Reading users from {}", path.display());
        return Ok(Arc::new(FileRecordSource::new(path.clone())));
    }

    let source_config = SourceConfig::new(config.source.url.clone()).with_timeout(config.timeout());
    let source = HttpRecordSource::new(source_config)?;
    tracing::info!("Fetching users from {}", source.users_url());
    Ok(Arc::new(source))
}

/// Open the SQLite edit store, creating the schema if needed
pub async fn open_sqlite_store(config: &ConsoleConfig) -> Result<SqliteEditStore> {
    let pool = lendboard_storage::create_pool(&config.storage.database_url).await?;
    lendboard_storage::run_migrations(&pool)
        .await
        .map_err(lendboard_storage::StorageError::from)?;
    Ok(SqliteEditStore::new(pool))
}

pub async fn open_store(config: &ConsoleConfig) -> Result<Arc<dyn EditStore>> {
    Ok(Arc::new(open_sqlite_store(config).await?))
}

/// Mount a loader over `source` and wait for the list to settle
pub async fn load_users(source: Arc<dyn RecordSource>) -> Result<Vec<UserRecord>> {
    let mut loader = UserListLoader::mount(source);
    match loader.wait().await {
        LoadState::Ready(records) => Ok(records),
        LoadState::Error(message) => Err(ConsoleError::Load(message)),
        LoadState::Loading => Err(ConsoleError::Load("Failed to fetch users".to_string())),
    }
}
