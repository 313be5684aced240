//! User profile domain model.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The resident user profile.
///
/// Exactly one profile is resident at a time, held in the persistence store
/// under a fixed key. Created at login, merged in place when KYC details are
/// submitted, cleared at logout. There is no multi-user session model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gov_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UserProfile {
    /// Creates a fresh profile for a login event. KYC fields start empty.
    pub fn new(email: impl Into<String>, name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            name: name.into(),
            is_admin,
            created_at: Utc::now().to_rfc3339(),
            gov_id: None,
            phone: None,
            address: None,
        }
    }

    /// Merges the KYC fields collected before a deployment into the profile.
    pub fn apply_kyc(&mut self, gov_id: String, phone: String, address: String) {
        self.gov_id = Some(gov_id);
        self.phone = Some(phone);
        self.address = Some(address);
    }

    /// True once all three KYC fields have been supplied.
    pub fn kyc_complete(&self) -> bool {
        self.gov_id.is_some() && self.phone.is_some() && self.address.is_some()
    }
}

/// Signer identity captured alongside a deployment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerInfo {
    pub name: String,
    pub gov_id: String,
    pub phone: String,
}
