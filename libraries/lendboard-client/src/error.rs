//! Error types for record sources.

use lendboard_core::DashboardError;
use thiserror::Error;

/// Errors that can occur while fetching the user list.
#[derive(Error, Debug)]
pub enum SourceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Source answered with a non-success status
    #[error("Failed to fetch users (HTTP {status})")]
    ServerError { status: u16, message: String },

    /// Source is offline or unreachable
    #[error("Failed to fetch users: server unreachable ({0})")]
    ServerUnreachable(String),

    /// Invalid source URL
    #[error("Invalid source URL: {0}")]
    InvalidUrl(String),

    /// Body was not JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// IO error reading a file source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for record source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

impl From<SourceError> for DashboardError {
    fn from(err: SourceError) -> Self {
        DashboardError::fetch(err.to_string())
    }
}
