/// Console error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load users: {0}")]
    Load(String),

    #[error("User {0} is not in the loaded list")]
    UnknownRow(u64),

    #[error(transparent)]
    Dashboard(#[from] lendboard_core::DashboardError),

    #[error(transparent)]
    Source(#[from] lendboard_client::SourceError),

    #[error(transparent)]
    Storage(#[from] lendboard_storage::StorageError),
}
