//! Simulated deployment ledger records.

use serde::{Deserialize, Serialize};

/// One append-only entry in the global deployment ledger.
///
/// Entries are never updated or removed after creation. The valuation and
/// royalty figures are fabricated display strings, and the contract hash is a
/// non-cryptographic fingerprint of the project name; none of this carries
/// financial meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub id: String,
    pub user_email: String,
    pub project_name: String,
    pub valuation: String,
    pub royalty_stake: String,
    pub deployed_at: String,
    pub contract_hash: String,
    pub signer_name: String,
    pub signer_gov_id: String,
    pub signer_phone: String,
}
