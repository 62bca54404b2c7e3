/// Core traits for Lendboard
use crate::error::Result;
use crate::types::ApiUser;
use async_trait::async_trait;

/// Supplies the full, unordered user list on demand.
///
/// Sources take no filter or page parameters; all narrowing happens
/// client-side after a full fetch.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// List every user the source holds.
    ///
    /// # Errors
    /// Returns `DashboardError::Fetch` when the list cannot be retrieved
    async fn list_users(&self) -> Result<Vec<ApiUser>>;
}

/// Key-value persistence for per-user detail overrides.
///
/// Keys look like `user-<id>`; values are serialized profile snapshots.
/// No TTL and no eviction.
#[async_trait]
pub trait EditStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    /// Returns `DashboardError::PersistenceWrite` when the store rejects the write
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
