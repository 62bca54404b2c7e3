//! In-memory adapters for the core traits

use crate::error::{DashboardError, Result};
use crate::traits::{EditStore, RecordSource};
use crate::types::ApiUser;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A record source that always returns the same list
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    users: Vec<ApiUser>,
}

impl StaticSource {
    pub fn new(users: Vec<ApiUser>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn list_users(&self) -> Result<Vec<ApiUser>> {
        Ok(self.users.clone())
    }
}

/// Edit store backed by a process-local map. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryEditStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryEditStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EditStore for MemoryEditStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DashboardError::storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DashboardError::persistence_write(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
