//! Filter parameters for the user list

use super::record::{UserRecord, UserStatus};
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status constraint. `All` imposes none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(UserStatus),
}

impl StatusFilter {
    pub fn matches(self, status: UserStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.to_string()
    }
}

impl From<UserStatus> for StatusFilter {
    fn from(status: UserStatus) -> Self {
        StatusFilter::Only(status)
    }
}

/// User-supplied predicate parameters.
///
/// An empty field imposes no constraint. Text fields match by
/// case-insensitive substring, `date_joined` by exact string. All present
/// constraints are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub organization: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub date_joined: String,
    pub status: StatusFilter,
}

impl FilterSpec {
    /// True when no field constrains the list
    pub fn is_unconstrained(&self) -> bool {
        self.organization.is_empty()
            && self.username.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.date_joined.is_empty()
            && self.status == StatusFilter::All
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        self.status.matches(record.status)
            && contains_ignore_case(&record.organization, &self.organization)
            && contains_ignore_case(&record.username, &self.username)
            && contains_ignore_case(&record.email, &self.email)
            && contains_ignore_case(&record.phone, &self.phone)
            && (self.date_joined.is_empty() || record.date_joined == self.date_joined)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
