//! User detail profile and the stored override that is merged over it
//!
//! Stored snapshots use camelCase keys, except `date_joined`, which keeps the
//! list row spelling so a saved `UserRecord` decodes as an override.

use super::record::{RecordId, UserStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub relationship: String,
}

/// Everything the detail view shows for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: RecordId,
    pub organization: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "date_joined")]
    pub date_joined: String,
    pub status: UserStatus,
    pub full_name: String,
    pub bvn: String,
    pub gender: String,
    pub marital_status: String,
    pub children: String,
    pub residence_type: String,
    pub education_level: String,
    pub employment_status: String,
    pub sector: String,
    pub duration_of_employment: String,
    pub office_email: String,
    pub monthly_income: String,
    pub loan_repayment: String,
    pub socials: Socials,
    pub guarantors: Vec<Guarantor>,
}

/// A stored partial profile. Absent fields fall back to the default profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileOverride {
    pub organization: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "date_joined")]
    pub date_joined: Option<String>,
    pub status: Option<UserStatus>,
    pub full_name: Option<String>,
    pub bvn: Option<String>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub children: Option<String>,
    pub residence_type: Option<String>,
    pub education_level: Option<String>,
    pub employment_status: Option<String>,
    pub sector: Option<String>,
    pub duration_of_employment: Option<String>,
    pub office_email: Option<String>,
    pub monthly_income: Option<String>,
    pub loan_repayment: Option<String>,
    pub socials: Option<SocialsOverride>,
    pub guarantors: Option<Vec<GuarantorOverride>>,
}

/// Stored social handles. Each missing handle keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialsOverride {
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

impl SocialsOverride {
    fn merged_over(self, base: Socials) -> Socials {
        Socials {
            twitter: self.twitter.unwrap_or(base.twitter),
            facebook: self.facebook.unwrap_or(base.facebook),
            instagram: self.instagram.unwrap_or(base.instagram),
        }
    }
}

/// One stored guarantor entry. Missing fields come from the default guarantor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuarantorOverride {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub relationship: Option<String>,
}

impl GuarantorOverride {
    fn merged_over(self, base: Guarantor) -> Guarantor {
        Guarantor {
            full_name: self.full_name.unwrap_or(base.full_name),
            phone: self.phone.unwrap_or(base.phone),
            email: self.email.unwrap_or(base.email),
            relationship: self.relationship.unwrap_or(base.relationship),
        }
    }
}

const DEFAULT_NAME: &str = "Grace Effiom";
const DEFAULT_PHONE: &str = "07060780922";
const DEFAULT_EMAIL: &str = "grace@lendsqr.com";

fn default_guarantor() -> Guarantor {
    Guarantor {
        full_name: "Debby Ogana".to_string(),
        phone: DEFAULT_PHONE.to_string(),
        email: "debby@gmail.com".to_string(),
        relationship: "Sister".to_string(),
    }
}

impl UserProfile {
    /// The built-in profile shown when nothing was stored for `id`
    pub fn default_for(id: RecordId) -> Self {
        Self {
            id,
            organization: "Lendsqr".to_string(),
            username: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            date_joined: "2019-05-14".to_string(),
            status: UserStatus::Active,
            full_name: DEFAULT_NAME.to_string(),
            bvn: DEFAULT_PHONE.to_string(),
            gender: "Female".to_string(),
            marital_status: "Single".to_string(),
            children: "None".to_string(),
            residence_type: "Parent's Apartment".to_string(),
            education_level: "B.Sc".to_string(),
            employment_status: "Employed".to_string(),
            sector: "FinTech".to_string(),
            duration_of_employment: "2 years".to_string(),
            office_email: DEFAULT_EMAIL.to_string(),
            monthly_income: "₦200,000 - ₦400,000".to_string(),
            loan_repayment: "40,000".to_string(),
            socials: Socials {
                twitter: "@grace_effiom".to_string(),
                facebook: DEFAULT_NAME.to_string(),
                instagram: "@grace_effiom".to_string(),
            },
            guarantors: vec![default_guarantor(), default_guarantor()],
        }
    }

    /// Field-by-field merge of `over` onto the default profile.
    ///
    /// `username` and `full_name` stand in for each other before the default
    /// applies. Stored `socials` merge per handle. A stored `guarantors` list
    /// replaces the default list, each entry filled from the default guarantor.
    pub fn merged(id: RecordId, over: ProfileOverride) -> Self {
        let base = Self::default_for(id);
        let username = over
            .username
            .clone()
            .or_else(|| over.full_name.clone())
            .unwrap_or(base.username);
        let full_name = over
            .full_name
            .or(over.username)
            .unwrap_or(base.full_name);

        Self {
            id,
            organization: over.organization.unwrap_or(base.organization),
            username,
            email: over.email.unwrap_or(base.email),
            phone: over.phone.unwrap_or(base.phone),
            date_joined: over.date_joined.unwrap_or(base.date_joined),
            status: over.status.unwrap_or(base.status),
            full_name,
            bvn: over.bvn.unwrap_or(base.bvn),
            gender: over.gender.unwrap_or(base.gender),
            marital_status: over.marital_status.unwrap_or(base.marital_status),
            children: over.children.unwrap_or(base.children),
            residence_type: over.residence_type.unwrap_or(base.residence_type),
            education_level: over.education_level.unwrap_or(base.education_level),
            employment_status: over.employment_status.unwrap_or(base.employment_status),
            sector: over.sector.unwrap_or(base.sector),
            duration_of_employment: over
                .duration_of_employment
                .unwrap_or(base.duration_of_employment),
            office_email: over.office_email.unwrap_or(base.office_email),
            monthly_income: over.monthly_income.unwrap_or(base.monthly_income),
            loan_repayment: over.loan_repayment.unwrap_or(base.loan_repayment),
            socials: match over.socials {
                Some(socials) => socials.merged_over(base.socials),
                None => base.socials,
            },
            guarantors: match over.guarantors {
                Some(entries) => entries
                    .into_iter()
                    .map(|entry| entry.merged_over(default_guarantor()))
                    .collect(),
                None => base.guarantors,
            },
        }
    }
}
