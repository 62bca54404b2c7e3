/// Core error types for Lendboard
use thiserror::Error;

/// Result type alias using `DashboardError`
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Core error type for Lendboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The user list could not be loaded (network error or non-success
    /// response). Terminal for that load attempt.
    #[error("{0}")]
    Fetch(String),

    /// Malformed input reached a boundary that requires a well-formed value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The edit store rejected a write
    #[error("Failed to persist edit: {0}")]
    PersistenceWrite(String),

    /// The edit store could not be read
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// Create a fetch failure
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a persistence write failure
    pub fn persistence_write(msg: impl Into<String>) -> Self {
        Self::PersistenceWrite(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
