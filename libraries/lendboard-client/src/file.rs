//! JSON file record source.

use crate::error::{Result, SourceError};
use async_trait::async_trait;
use lendboard_core::{users_from_value, ApiUser, RecordSource};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the user list from a JSON file holding the same array the HTTP
/// route returns. The file is re-read on every call.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_body(&self) -> Result<serde_json::Value> {
        debug!(path = %self.path.display(), "Reading user list file");
        let bytes = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            SourceError::ParseError(format!("{}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn list_users(&self) -> lendboard_core::Result<Vec<ApiUser>> {
        let body = self.read_body().await?;
        users_from_value(body)
    }
}
