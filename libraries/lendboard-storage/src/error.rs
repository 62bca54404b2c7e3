/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Convert a failed write into the core persistence failure
    pub fn into_write_failure(self) -> lendboard_core::DashboardError {
        lendboard_core::DashboardError::persistence_write(self.to_string())
    }
}

impl From<StorageError> for lendboard_core::DashboardError {
    fn from(err: StorageError) -> Self {
        lendboard_core::DashboardError::storage(err.to_string())
    }
}
