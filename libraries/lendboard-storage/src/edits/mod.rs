//! Per-user edit rows
//!
//! Values are opaque strings here; the overlay decides what they contain.

use crate::error::Result;
use sqlx::SqlitePool;

/// One stored edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRow {
    pub key: String,
    pub value: String,
    /// Unix timestamp of the last write, in milliseconds
    pub updated_at: i64,
}

/// Get the value stored under `key`
///
/// # Returns
///
/// Returns `Ok(Some(value))` if the key exists, `Ok(None)` if not found
pub async fn get_edit(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let value: Option<String> = sqlx::query_scalar("SELECT value FROM user_edits WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(value)
}

/// Insert or replace the value stored under `key`
pub async fn set_edit(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    let now = chrono::Utc::now().timestamp_millis();

    sqlx::query(
        "INSERT INTO user_edits (key, value, updated_at, write_seq)
         VALUES (?, ?, ?, (SELECT COALESCE(MAX(write_seq), 0) + 1 FROM user_edits))
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at,
             write_seq = excluded.write_seq",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// All stored edits, most recently written first
pub async fn list_edits(pool: &SqlitePool) -> Result<Vec<EditRow>> {
    let rows: Vec<(String, String, i64)> = sqlx::query_as(
        "SELECT key, value, updated_at FROM user_edits ORDER BY write_seq DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(key, value, updated_at)| EditRow {
            key,
            value,
            updated_at,
        })
        .collect())
}
