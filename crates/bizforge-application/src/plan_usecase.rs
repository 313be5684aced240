//! Plan generation and deployment use cases.
//!
//! Coordinates the generation agents with the persistence services. All
//! operations act on behalf of the resident profile; operations that need one
//! fail with a security error when nobody is signed in. Service handles are
//! passed in at construction - there are no hidden singletons, so parallel
//! use cases over separate stores never interfere.

use std::sync::Arc;

use bizforge_core::audit::{AuditLog, RiskLevel, UserFeedback};
use bizforge_core::deployment::DeploymentRecord;
use bizforge_core::error::Result;
use bizforge_core::generation::{AssetGenerator, FailurePolicy, PlanGenerator};
use bizforge_core::language::Language;
use bizforge_core::project::SavedProject;
use bizforge_core::user::{SignerInfo, UserProfile};
use bizforge_core::BizforgeError;
use bizforge_infrastructure::{AuthService, LedgerService, LoggerService, VaultService};

pub struct PlanUseCase {
    generator: Arc<dyn PlanGenerator>,
    assets: Option<Arc<dyn AssetGenerator>>,
    auth: AuthService,
    vault: VaultService,
    ledger: LedgerService,
    logger: LoggerService,
}

impl PlanUseCase {
    pub fn new(
        generator: Arc<dyn PlanGenerator>,
        auth: AuthService,
        vault: VaultService,
        ledger: LedgerService,
        logger: LoggerService,
    ) -> Self {
        Self {
            generator,
            assets: None,
            auth,
            vault,
            ledger,
            logger,
        }
    }

    /// Attaches an asset generator, enabling marketing imagery.
    pub fn with_asset_generator(mut self, assets: Arc<dyn AssetGenerator>) -> Self {
        self.assets = Some(assets);
        self
    }

    /// The authentication service this use case acts through.
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Rewrites the idea into a polished one-sentence pitch.
    ///
    /// This operation never fails: under [`FailurePolicy::FallbackToInput`]
    /// every error resolves to the original input text.
    pub async fn improve_idea(&self, idea: &str, language: Language) -> String {
        let result = self.generator.improve_idea(idea, language).await;
        if let Err(err) = &result {
            tracing::warn!(%err, "idea improvement failed, falling back to input");
        }
        FailurePolicy::FallbackToInput
            .resolve(result, idea)
            .unwrap_or_else(|_| idea.to_string())
    }

    /// Generates a plan for the idea and saves it into the vault.
    ///
    /// Generation failures propagate; no partial plan is ever saved.
    pub async fn generate(&self, idea: &str, language: Language) -> Result<SavedProject> {
        let user = self.require_user()?;

        let plan = self.generator.generate_plan(idea, language).await?;
        let project = self
            .vault
            .save_project(&user.email, idea, plan, language)?;

        self.logger.log(
            &user.email,
            "PLAN_GENERATED",
            &format!("Generated plan for: {}", project.name),
            RiskLevel::Medium,
        )?;

        Ok(project)
    }

    /// Produces a promotional image for a brand name.
    ///
    /// Failures propagate - there is no sensible default image.
    pub async fn generate_marketing_asset(&self, brand_name: &str) -> Result<String> {
        let assets = self
            .assets
            .as_ref()
            .ok_or_else(|| BizforgeError::config("No asset generator configured"))?;
        let uri = assets.generate_marketing_asset(brand_name).await?;
        Ok(uri)
    }

    /// Records a simulated deployment of a saved project.
    ///
    /// The signer's KYC details are merged into the resident profile before
    /// the ledger entry is written.
    pub fn deploy(
        &self,
        project_id: &str,
        signer: &SignerInfo,
        address: &str,
    ) -> Result<DeploymentRecord> {
        let user = self.require_user()?;

        let project = self
            .vault
            .find_project(project_id)
            .ok_or_else(|| BizforgeError::not_found("project", project_id))?;

        self.auth
            .update_kyc(&signer.gov_id, &signer.phone, address)?;
        self.ledger
            .record_deployment(&user.email, &project.name, signer)
    }

    /// Records feedback from the resident profile.
    pub fn submit_feedback(
        &self,
        rating: u8,
        comment: &str,
        project_name: &str,
    ) -> Result<UserFeedback> {
        let user = self.require_user()?;
        self.logger
            .submit_feedback(&user.email, rating, comment, project_name)
    }

    /// Returns the saved projects, in save order.
    pub fn projects(&self) -> Vec<SavedProject> {
        self.vault.projects()
    }

    /// Returns the full deployment ledger. Admin only.
    pub fn global_ledger(&self) -> Result<Vec<DeploymentRecord>> {
        self.require_admin()?;
        Ok(self.ledger.global_ledger())
    }

    /// Returns the audit log, newest first. Admin only.
    pub fn audit_logs(&self) -> Result<Vec<AuditLog>> {
        self.require_admin()?;
        Ok(self.logger.logs())
    }

    fn require_user(&self) -> Result<UserProfile> {
        self.auth
            .current_user()
            .ok_or_else(|| BizforgeError::security("No user is signed in"))
    }

    fn require_admin(&self) -> Result<UserProfile> {
        let user = self.require_user()?;
        if !user.is_admin {
            return Err(BizforgeError::security("Admin access required"));
        }
        Ok(user)
    }
}
