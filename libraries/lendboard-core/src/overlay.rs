//! Detail-view profiles backed by the edit store
//!
//! Writes go straight to the store before the call returns. A failed write is
//! logged and swallowed; the caller still gets the updated profile, it just
//! won't survive a reload.

use crate::error::Result;
use crate::traits::EditStore;
use crate::types::{ProfileOverride, RecordId, UserProfile, UserRecord, UserStatus};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Store key for a user's overrides
pub fn edit_key(id: RecordId) -> String {
    format!("user-{}", id)
}

/// Reads and writes detail profiles through an injected `EditStore`
#[derive(Clone)]
pub struct UserDetails {
    store: Arc<dyn EditStore>,
}

impl UserDetails {
    pub fn new(store: Arc<dyn EditStore>) -> Self {
        Self { store }
    }

    /// Save a list row under its key ahead of opening its detail view.
    pub async fn snapshot_row(&self, record: &UserRecord) {
        self.persist(record.id, record).await;
    }

    /// Load the profile for `id`: the stored override merged over the
    /// default profile, or the default profile when nothing is stored.
    ///
    /// # Errors
    /// Fails when the store cannot be read or the stored value does not decode.
    pub async fn open(&self, id: RecordId) -> Result<UserProfile> {
        let key = edit_key(id);
        match self.store.get(&key).await? {
            Some(stored) => {
                let over: ProfileOverride = serde_json::from_str(&stored)?;
                debug!(key = %key, "Merging stored profile override");
                Ok(UserProfile::merged(id, over))
            }
            None => {
                debug!(key = %key, "No stored override, using default profile");
                Ok(UserProfile::default_for(id))
            }
        }
    }

    /// Mark the user inactive and persist the full profile
    pub async fn blacklist(&self, profile: UserProfile) -> UserProfile {
        self.set_status(profile, UserStatus::Inactive).await
    }

    /// Mark the user active and persist the full profile
    pub async fn activate(&self, profile: UserProfile) -> UserProfile {
        self.set_status(profile, UserStatus::Active).await
    }

    async fn set_status(&self, profile: UserProfile, status: UserStatus) -> UserProfile {
        let next = UserProfile { status, ..profile };
        self.persist(next.id, &next).await;
        next
    }

    async fn persist<T: Serialize + Sync>(&self, id: RecordId, value: &T) {
        let key = edit_key(id);
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize user snapshot");
                return;
            }
        };

        if let Err(e) = self.store.set(&key, &json).await {
            warn!(key = %key, error = %e, "Failed to persist user snapshot");
        }
    }
}
