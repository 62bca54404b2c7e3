//! Lendboard Record Sources
//!
//! Implementations of [`lendboard_core::RecordSource`]:
//!
//! - **HTTP**: `GET <base>/api/users`, the dashboard's "list users" route
//! - **File**: a JSON array of users on disk
//!
//! Both return the full list; filtering and paging happen in the core
//! pipeline.
//!
//! # Example
//!
//! ```ignore
//! use lendboard_client::{HttpRecordSource, SourceConfig};
//! use lendboard_core::RecordSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpRecordSource::new(SourceConfig::new("http://localhost:3000"))?;
//!     let users = source.list_users().await?;
//!     println!("Fetched {} users", users.len());
//!     Ok(())
//! }
//! ```

mod error;
mod file;
mod http;
mod types;

pub use error::{Result, SourceError};
pub use file::FileRecordSource;
pub use http::HttpRecordSource;
pub use types::{SourceConfig, USERS_PATH};
