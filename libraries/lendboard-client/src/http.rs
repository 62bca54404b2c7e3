//! HTTP record source.

use crate::error::{Result, SourceError};
use crate::types::{SourceConfig, USERS_PATH};
use async_trait::async_trait;
use lendboard_core::{users_from_value, ApiUser, RecordSource};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Fetches the user list from a dashboard's "list users" route.
///
/// One GET per call, no retries. Any non-success status is a fetch failure.
pub struct HttpRecordSource {
    http: Client,
    users_url: Url,
}

impl HttpRecordSource {
    /// Create a new source with the given configuration.
    pub fn new(config: SourceConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(SourceError::InvalidUrl("URL cannot be empty".into()));
        }

        let base = config.url.trim().trim_end_matches('/');
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(SourceError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let users_url = Url::parse(&format!("{}/{}", base, USERS_PATH))
            .map_err(|e| SourceError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Lendboard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, users_url })
    }

    /// The fully resolved "list users" URL.
    pub fn users_url(&self) -> &str {
        self.users_url.as_str()
    }

    async fn fetch_body(&self) -> Result<serde_json::Value> {
        debug!(url = %self.users_url, "Fetching user list");

        let response = self
            .http
            .get(self.users_url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    SourceError::ServerUnreachable(e.to_string())
                } else {
                    SourceError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                SourceError::ParseError(format!("Failed to parse user list: {}", e))
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(SourceError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn list_users(&self) -> lendboard_core::Result<Vec<ApiUser>> {
        let body = self.fetch_body().await?;
        let users = users_from_value(body)?;
        debug!(count = users.len(), "Fetched user list");
        Ok(users)
    }
}
