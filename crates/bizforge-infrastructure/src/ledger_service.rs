//! The global deployment ledger.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use bizforge_core::audit::RiskLevel;
use bizforge_core::deployment::DeploymentRecord;
use bizforge_core::error::Result;
use bizforge_core::user::SignerInfo;
use chrono::Utc;
use uuid::Uuid;

use crate::logger_service::LoggerService;
use crate::storage::{LocalStore, keys};

/// Fabricated display figures stamped onto every deployment record.
const VALUATION: &str = "Estimated $1.2M";
const ROYALTY_STAKE: &str = "13% Perpetual";

/// Append-only ledger of simulated deployments.
///
/// Records are never updated or removed, and `global_ledger` returns the full
/// unfiltered array - per-user scoping is the caller's concern (the admin
/// surface shows everything).
pub struct LedgerService {
    store: LocalStore,
    logger: LoggerService,
}

impl LedgerService {
    pub fn new(store: LocalStore, logger: LoggerService) -> Self {
        Self { store, logger }
    }

    /// Appends a deployment record for the named project.
    pub fn record_deployment(
        &self,
        user_email: &str,
        project_name: &str,
        signer: &SignerInfo,
    ) -> Result<DeploymentRecord> {
        let record = DeploymentRecord {
            id: Uuid::new_v4().to_string(),
            user_email: user_email.to_string(),
            project_name: project_name.to_string(),
            valuation: VALUATION.to_string(),
            royalty_stake: ROYALTY_STAKE.to_string(),
            deployed_at: Utc::now().to_rfc3339(),
            contract_hash: contract_hash(project_name),
            signer_name: signer.name.clone(),
            signer_gov_id: signer.gov_id.clone(),
            signer_phone: signer.phone.clone(),
        };

        let mut records: Vec<DeploymentRecord> = self.store.read_vec(keys::LEDGER);
        records.push(record.clone());
        self.store.write(keys::LEDGER, &records)?;

        self.logger.log(
            user_email,
            "PROTOCOL_EXECUTION",
            &format!("Deployed: {project_name}"),
            RiskLevel::Critical,
        )?;

        Ok(record)
    }

    /// Returns every deployment record, in call order, unfiltered.
    pub fn global_ledger(&self) -> Vec<DeploymentRecord> {
        self.store.read_vec(keys::LEDGER)
    }
}

/// Non-cryptographic contract fingerprint derived from the project name.
///
/// Base64 of the name, truncated and lowercased, with a hex-style prefix.
/// This is a display artifact, not a tamper-evidence mechanism.
pub fn contract_hash(project_name: &str) -> String {
    let encoded = BASE64_STANDARD.encode(project_name.as_bytes());
    let fragment: String = encoded.chars().take(16).collect();
    format!("0x{}", fragment.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_service() -> (TempDir, LedgerService) {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();
        let logger = LoggerService::new(store.clone());
        (temp_dir, LedgerService::new(store, logger))
    }

    fn signer() -> SignerInfo {
        SignerInfo {
            name: "Alice".into(),
            gov_id: "GOV-9".into(),
            phone: "+1-555-0100".into(),
        }
    }

    #[test]
    fn test_append_only_in_call_order() {
        let (_dir, ledger) = test_service();
        let first = ledger
            .record_deployment("a@b.c", "CrumbShare", &signer())
            .unwrap();
        let second = ledger
            .record_deployment("a@b.c", "LoafLoop", &signer())
            .unwrap();

        let records = ledger.global_ledger();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], first);
        assert_eq!(records[1], second);
    }

    #[test]
    fn test_existing_entries_never_change() {
        let (_dir, ledger) = test_service();
        ledger
            .record_deployment("a@b.c", "CrumbShare", &signer())
            .unwrap();
        let before = ledger.global_ledger();

        ledger
            .record_deployment("d@e.f", "LoafLoop", &signer())
            .unwrap();
        let after = ledger.global_ledger();
        assert_eq!(&after[..1], &before[..]);
    }

    #[test]
    fn test_record_carries_signer_and_fabricated_figures() {
        let (_dir, ledger) = test_service();
        let record = ledger
            .record_deployment("a@b.c", "CrumbShare", &signer())
            .unwrap();
        assert_eq!(record.valuation, "Estimated $1.2M");
        assert_eq!(record.royalty_stake, "13% Perpetual");
        assert_eq!(record.signer_gov_id, "GOV-9");
    }

    #[test]
    fn test_contract_hash_is_deterministic() {
        assert_eq!(contract_hash("CrumbShare"), contract_hash("CrumbShare"));
        assert_ne!(contract_hash("CrumbShare"), contract_hash("LoafLoop"));
        assert!(contract_hash("CrumbShare").starts_with("0x"));
        // 0x prefix plus at most 16 base64 characters
        assert!(contract_hash("CrumbShare").len() <= 18);
    }

    #[test]
    fn test_deployment_emits_critical_audit_entry() {
        let (_dir, ledger) = test_service();
        ledger
            .record_deployment("a@b.c", "CrumbShare", &signer())
            .unwrap();
        let logs = ledger.logger.logs();
        assert_eq!(logs[0].action, "PROTOCOL_EXECUTION");
        assert_eq!(logs[0].risk_level, RiskLevel::Critical);
    }
}
