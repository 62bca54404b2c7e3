/// Console configuration
use crate::error::{ConsoleError, Result};
use lendboard_core::PageSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "lendboard.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_source")]
    pub source: SourceSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_list")]
    pub list: ListSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Base URL of the dashboard serving `/api/users`
    #[serde(default = "default_url")]
    pub url: String,

    /// JSON file used instead of the HTTP route when set
    #[serde(default)]
    pub file: Option<PathBuf>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl ConsoleConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `lendboard.toml` is read
    /// if present. `LENDBOARD_`-prefixed variables override both, with `__`
    /// between sections (e.g. `LENDBOARD_STORAGE__DATABASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("LENDBOARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ConsoleError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConsoleError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.source.file.is_none() && self.source.url.trim().is_empty() {
            return Err(ConsoleError::Config(
                "source.url is required when source.file is not set (set LENDBOARD_SOURCE__URL)"
                    .to_string(),
            ));
        }

        if self.source.timeout_secs == 0 {
            return Err(ConsoleError::Config(
                "source.timeout_secs must be positive".to_string(),
            ));
        }

        self.page_size()?;
        Ok(())
    }

    pub fn page_size(&self) -> Result<PageSize> {
        PageSize::try_from(self.list.page_size).map_err(|e| ConsoleError::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }
}

// Default values
fn default_source() -> SourceSettings {
    SourceSettings {
        url: default_url(),
        file: None,
        timeout_secs: default_timeout_secs(),
    }
}

fn default_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/lendboard.db".to_string()
}

fn default_list() -> ListSettings {
    ListSettings {
        page_size: default_page_size(),
    }
}

fn default_page_size() -> usize {
    10
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            storage: default_storage(),
            list: default_list(),
        }
    }
}
