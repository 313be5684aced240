//! The saved-projects vault.

use bizforge_core::audit::RiskLevel;
use bizforge_core::error::Result;
use bizforge_core::language::Language;
use bizforge_core::plan::StartupPlan;
use bizforge_core::project::SavedProject;

use crate::logger_service::LoggerService;
use crate::storage::{LocalStore, keys};

/// Append-only store of idea/plan pairs.
///
/// Projects are never deduplicated and the vault is unbounded; saving the
/// same idea twice yields two entries.
pub struct VaultService {
    store: LocalStore,
    logger: LoggerService,
}

impl VaultService {
    pub fn new(store: LocalStore, logger: LoggerService) -> Self {
        Self { store, logger }
    }

    /// Wraps the plan into a [`SavedProject`] and appends it to the vault.
    pub fn save_project(
        &self,
        user_email: &str,
        idea: &str,
        plan: StartupPlan,
        language: Language,
    ) -> Result<SavedProject> {
        let project = SavedProject::from_plan(idea, language, plan);

        let mut projects: Vec<SavedProject> = self.store.read_vec(keys::VAULT);
        projects.push(project.clone());
        self.store.write(keys::VAULT, &projects)?;

        self.logger.log(
            user_email,
            "DATA_PERSISTENCE",
            &format!("Vault updated with: {}", project.name),
            RiskLevel::Low,
        )?;

        Ok(project)
    }

    /// Returns all saved projects in save order.
    pub fn projects(&self) -> Vec<SavedProject> {
        self.store.read_vec(keys::VAULT)
    }

    /// Looks a project up by id.
    pub fn find_project(&self, id: &str) -> Option<SavedProject> {
        self.projects().into_iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizforge_core::testing::sample_plan;
    use tempfile::TempDir;

    fn test_service() -> (TempDir, VaultService) {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();
        let logger = LoggerService::new(store.clone());
        (temp_dir, VaultService::new(store, logger))
    }

    #[test]
    fn test_save_and_list() {
        let (_dir, vault) = test_service();
        let saved = vault
            .save_project("a@b.c", "surplus bread", sample_plan(), Language::English)
            .unwrap();

        let projects = vault.projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0], saved);
    }

    #[test]
    fn test_round_trip_preserves_plan_deep_equality() {
        let (_dir, vault) = test_service();
        let plan = sample_plan();
        let saved = vault
            .save_project("a@b.c", "surplus bread", plan.clone(), Language::English)
            .unwrap();

        let restored = vault.find_project(&saved.id).unwrap();
        assert_eq!(restored.plan, plan);
    }

    #[test]
    fn test_duplicate_saves_are_kept() {
        let (_dir, vault) = test_service();
        for _ in 0..2 {
            vault
                .save_project("a@b.c", "same idea", sample_plan(), Language::English)
                .unwrap();
        }
        assert_eq!(vault.projects().len(), 2);
    }

    #[test]
    fn test_save_emits_audit_entry() {
        let (_dir, vault) = test_service();
        vault
            .save_project("a@b.c", "surplus bread", sample_plan(), Language::English)
            .unwrap();
        let logs = vault.logger.logs();
        assert_eq!(logs[0].action, "DATA_PERSISTENCE");
        assert!(logs[0].details.contains("CrumbShare"));
    }
}
