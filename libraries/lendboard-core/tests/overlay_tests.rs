//! Tests for the detail-view overlay over an edit store

use async_trait::async_trait;
use lendboard_core::{
    edit_key, DashboardError, EditStore, MemoryEditStore, Result, UserDetails, UserRecord,
    UserStatus,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Store whose writes always fail, as when storage is unavailable
#[derive(Default)]
struct UnavailableStore {
    attempts: AtomicUsize,
}

#[async_trait]
impl EditStore for UnavailableStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DashboardError::persistence_write("quota exceeded"))
    }
}

fn row(id: u64) -> UserRecord {
    UserRecord {
        id,
        organization: "Lendstar".to_string(),
        username: "Femi Adeyemi".to_string(),
        email: "femiadeyemi554@gmail.com".to_string(),
        phone: "08134567890".to_string(),
        date_joined: "November 23, 2023, 04:05 PM".to_string(),
        status: UserStatus::Pending,
    }
}

#[test]
fn key_format() {
    assert_eq!(edit_key(42), "user-42");
}

#[tokio::test]
async fn missing_override_yields_default_profile() {
    let details = UserDetails::new(Arc::new(MemoryEditStore::new()));
    let profile = details.open(9).await.unwrap();

    assert_eq!(profile.id, 9);
    assert_eq!(profile.username, "Grace Effiom");
    assert_eq!(profile.status, UserStatus::Active);
    assert_eq!(profile.guarantors.len(), 2);
}

#[tokio::test]
async fn partial_override_keeps_default_fields() {
    let store = Arc::new(MemoryEditStore::new());
    store
        .set(&edit_key(5), r#"{"status": "inactive"}"#)
        .await
        .unwrap();

    let details = UserDetails::new(store);
    let profile = details.open(5).await.unwrap();

    assert_eq!(profile.status, UserStatus::Inactive);
    assert_eq!(profile.gender, "Female");
    assert_eq!(profile.socials.twitter, "@grace_effiom");
}

#[tokio::test]
async fn partial_socials_override_still_opens() {
    let store = Arc::new(MemoryEditStore::new());
    store
        .set(
            &edit_key(2),
            r#"{"status":"inactive","socials":{"twitter":"@x"}}"#,
        )
        .await
        .unwrap();

    let details = UserDetails::new(store);
    let profile = details.open(2).await.unwrap();

    assert_eq!(profile.status, UserStatus::Inactive);
    assert_eq!(profile.socials.twitter, "@x");
    assert_eq!(profile.socials.facebook, "Grace Effiom");
    assert_eq!(profile.socials.instagram, "@grace_effiom");
    assert_eq!(profile.gender, "Female");
}

#[tokio::test]
async fn snapshot_then_open_shows_row_fields() {
    let store = Arc::new(MemoryEditStore::new());
    let details = UserDetails::new(store.clone());

    details.snapshot_row(&row(17)).await;
    assert!(store.get("user-17").await.unwrap().is_some());

    let profile = details.open(17).await.unwrap();
    assert_eq!(profile.username, "Femi Adeyemi");
    assert_eq!(profile.full_name, "Femi Adeyemi");
    assert_eq!(profile.organization, "Lendstar");
    assert_eq!(profile.status, UserStatus::Pending);
    assert_eq!(profile.marital_status, "Single");
}

#[tokio::test]
async fn status_changes_persist_the_full_profile() {
    let store = Arc::new(MemoryEditStore::new());
    let details = UserDetails::new(store.clone());
    details.snapshot_row(&row(3)).await;

    let profile = details.open(3).await.unwrap();
    let blacklisted = details.blacklist(profile).await;
    assert_eq!(blacklisted.status, UserStatus::Inactive);

    // A fresh open sees the write, and the stored value carries every field.
    let reopened = details.open(3).await.unwrap();
    assert_eq!(reopened, blacklisted);

    let stored = store.get("user-3").await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json["status"], "inactive");
    assert_eq!(json["residenceType"], "Parent's Apartment");
    assert_eq!(json["guarantors"].as_array().map(|g| g.len()), Some(2));

    let activated = details.activate(reopened).await;
    assert_eq!(activated.status, UserStatus::Active);
    assert_eq!(details.open(3).await.unwrap().status, UserStatus::Active);
}

#[tokio::test]
async fn write_failure_is_swallowed() {
    let store = Arc::new(UnavailableStore::default());
    let details = UserDetails::new(store.clone());

    details.snapshot_row(&row(1)).await;
    let profile = details.open(1).await.unwrap();
    let updated = details.blacklist(profile).await;

    assert_eq!(updated.status, UserStatus::Inactive);
    assert_eq!(store.attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn undecodable_override_is_an_error() {
    let store = Arc::new(MemoryEditStore::new());
    store.set("user-8", "not json").await.unwrap();

    let details = UserDetails::new(store);
    let err = details.open(8).await.unwrap_err();
    assert!(matches!(err, DashboardError::Serialization(_)));
}
