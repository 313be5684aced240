//! Resident-profile authentication service.
//!
//! Models a login/logout lifecycle over the local store. Exactly one profile
//! is resident at a time under a fixed key. Privileged access is decided by
//! the injected [`AdminPolicy`]; the default static policy is a deterministic
//! literal comparison and NOT a security boundary (see `bizforge_core::policy`).

use std::sync::Arc;

use bizforge_core::audit::RiskLevel;
use bizforge_core::error::Result;
use bizforge_core::policy::{AdminPolicy, StaticAdminPolicy};
use bizforge_core::user::UserProfile;

use crate::logger_service::LoggerService;
use crate::storage::{LocalStore, keys};

/// Display name given to profiles that pass the admin policy.
const ADMIN_DISPLAY_NAME: &str = "Platform Architect";

pub struct AuthService {
    store: LocalStore,
    logger: LoggerService,
    policy: Arc<dyn AdminPolicy>,
}

impl AuthService {
    /// Creates a service with the default static admin policy.
    pub fn new(store: LocalStore, logger: LoggerService) -> Self {
        Self::with_policy(store, logger, Arc::new(StaticAdminPolicy::default()))
    }

    /// Creates a service with a caller-supplied admin policy.
    pub fn with_policy(
        store: LocalStore,
        logger: LoggerService,
        policy: Arc<dyn AdminPolicy>,
    ) -> Self {
        Self {
            store,
            logger,
            policy,
        }
    }

    /// Logs a user in, replacing any resident profile.
    ///
    /// The second credential doubles as the display name for ordinary users;
    /// for a privileged match the profile gets a fixed admin display name.
    pub fn login(&self, email: &str, pass_or_name: &str) -> Result<UserProfile> {
        let is_admin = self.policy.is_privileged(email, pass_or_name);

        let name = if is_admin {
            ADMIN_DISPLAY_NAME
        } else {
            pass_or_name
        };
        let user = UserProfile::new(email, name, is_admin);

        self.store.write(keys::USER, &user)?;
        self.logger.log(
            email,
            "LOGIN_EVENT",
            &format!("Authenticated via local entry point. Admin: {is_admin}"),
            if is_admin {
                RiskLevel::High
            } else {
                RiskLevel::Low
            },
        )?;

        Ok(user)
    }

    /// Clears the resident profile.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(keys::USER)
    }

    /// Reads the resident profile back, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.store.read(keys::USER)
    }

    /// Merges KYC fields into the resident profile.
    ///
    /// Returns the updated profile, or `None` when no profile is resident.
    pub fn update_kyc(
        &self,
        gov_id: &str,
        phone: &str,
        address: &str,
    ) -> Result<Option<UserProfile>> {
        let Some(mut user) = self.current_user() else {
            return Ok(None);
        };

        user.apply_kyc(gov_id.to_string(), phone.to_string(), address.to_string());
        self.store.write(keys::USER, &user)?;
        Ok(Some(user))
    }
}
