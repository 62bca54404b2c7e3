//! User list records
//!
//! `ApiUser` is what a record source returns. `UserRecord` is the same row
//! after the list view numbered it.

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positional identifier, 1-based, assigned per fetch.
pub type RecordId = u64;

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    /// Every status, in display order
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Inactive, UserStatus::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "pending" => Ok(UserStatus::Pending),
            other => Err(DashboardError::invalid_input(format!(
                "unknown user status '{}'",
                other
            ))),
        }
    }
}

/// A user as returned by the "list users" route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub organization: String,
    pub username: String,
    pub email: String,
    /// Digit string
    pub phone: String,
    /// Display-formatted join date
    pub date_joined: String,
    pub status: UserStatus,
}

/// One row of the loaded user list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Position in the fetched list. Only stable for the lifetime of that list.
    pub id: RecordId,
    pub organization: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub date_joined: String,
    pub status: UserStatus,
}

impl UserRecord {
    pub fn from_api(id: RecordId, user: ApiUser) -> Self {
        Self {
            id,
            organization: user.organization,
            username: user.username,
            email: user.email,
            phone: user.phone,
            date_joined: user.date_joined,
            status: user.status,
        }
    }
}

/// Number a freshly fetched list by 1-based position.
///
/// Every fetch renumbers from scratch; there is no identity across fetches.
pub fn assign_ids(users: Vec<ApiUser>) -> Vec<UserRecord> {
    users
        .into_iter()
        .zip(1..)
        .map(|(user, id)| UserRecord::from_api(id, user))
        .collect()
}

/// Decode an untyped "list users" body.
///
/// # Errors
/// `InvalidInput` when the body is not a JSON array, `Serialization` when an
/// element is not a user.
pub fn users_from_value(value: serde_json::Value) -> Result<Vec<ApiUser>> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(DashboardError::from))
            .collect(),
        other => Err(DashboardError::invalid_input(format!(
            "expected a list of users, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_user(name: &str) -> ApiUser {
        ApiUser {
            organization: "Lendsqr".to_string(),
            username: name.to_string(),
            email: format!("{}@gmail.com", name.to_lowercase()),
            phone: "07012345678".to_string(),
            date_joined: "March 02, 2021, 09:15 AM".to_string(),
            status: UserStatus::Pending,
        }
    }

    #[test]
    fn ids_follow_source_position() {
        let records = assign_ids(vec![api_user("Ada"), api_user("Bola"), api_user("Chidi")]);
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(records[1].username, "Bola");
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Active".parse::<UserStatus>().unwrap(), UserStatus::Active);
        assert_eq!(" pending ".parse::<UserStatus>().unwrap(), UserStatus::Pending);
        assert!("blacklisted".parse::<UserStatus>().is_err());
    }

    #[test]
    fn decodes_wire_body() {
        let body = json!([{
            "organization": "Lendsqr",
            "username": "Ada Obi",
            "email": "adaobi123@gmail.com",
            "phone": "08012345678",
            "date_joined": "May 15, 2020, 10:00 AM",
            "status": "inactive"
        }]);

        let users = users_from_value(body).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].status, UserStatus::Inactive);
    }

    #[test]
    fn non_array_body_is_invalid_input() {
        let err = users_from_value(json!({"users": []})).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidInput(ref msg) if msg.contains("an object")));
    }

    #[test]
    fn malformed_element_is_serialization_error() {
        let err = users_from_value(json!([{"username": "no status"}])).unwrap_err();
        assert!(matches!(err, DashboardError::Serialization(_)));
    }
}
