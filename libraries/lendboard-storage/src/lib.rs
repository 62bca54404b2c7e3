//! Lendboard Storage
//!
//! `SQLite` persistence for the detail-view edit store.
//!
//! Overrides are stored as key-value rows (`user-<id>` -> JSON snapshot) in a
//! single `user_edits` table. There is no TTL and no eviction.
//!
//! # Example
//!
//! ```rust,no_run
//! use lendboard_core::EditStore;
//! use lendboard_storage::{create_pool, run_migrations, SqliteEditStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://./data/lendboard.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteEditStore::new(pool);
//! store.set("user-1", r#"{"status":"inactive"}"#).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod edits;

pub use context::SqliteEditStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup so the `user_edits` table exists.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// The database file and its parent directory are created when missing.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://lendboard.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    debug!(url = %database_url, "Creating edit store pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    debug!("Edit store pool ready");

    Ok(pool)
}
