//! Source configuration.

use std::time::Duration;

/// Path of the "list users" route, relative to the base URL.
pub const USERS_PATH: &str = "api/users";

/// Configuration for the HTTP record source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL of the dashboard (e.g., "http://localhost:3000")
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl SourceConfig {
    /// Create a config with the default 30 second timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
