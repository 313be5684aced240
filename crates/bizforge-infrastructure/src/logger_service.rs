//! Audit log and feedback capture.

use bizforge_core::audit::{AuditLog, RiskLevel, UserFeedback};
use bizforge_core::error::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::storage::{LocalStore, keys};

/// The stored audit log never grows beyond this many entries.
const MAX_AUDIT_ENTRIES: usize = 1000;

const ANONYMOUS: &str = "ANONYMOUS";

/// Append-only audit/feedback logger over a [`LocalStore`].
///
/// Each instance carries its own session id, stamped onto every entry it
/// records, so entries from different logger instances remain
/// distinguishable in a shared store.
#[derive(Debug, Clone)]
pub struct LoggerService {
    store: LocalStore,
    session_id: String,
}

impl LoggerService {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            session_id: Uuid::new_v4().to_string(),
        }
    }

    /// Appends an audit entry.
    ///
    /// When the stored array is full the oldest entries are dropped first, so
    /// the array holds at most [`MAX_AUDIT_ENTRIES`] entries after the append.
    pub fn log(
        &self,
        user_email: &str,
        action: &str,
        details: &str,
        risk_level: RiskLevel,
    ) -> Result<AuditLog> {
        let mut logs: Vec<AuditLog> = self.store.read_vec(keys::AUDIT_LOGS);

        while logs.len() >= MAX_AUDIT_ENTRIES {
            logs.remove(0);
        }

        let entry = AuditLog {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            user_email: if user_email.is_empty() {
                ANONYMOUS.to_string()
            } else {
                user_email.to_string()
            },
            action: action.to_string(),
            details: details.to_string(),
            session_id: self.session_id.clone(),
            risk_level,
        };

        tracing::debug!(action, %risk_level, "audit entry recorded");

        logs.push(entry.clone());
        self.store.write(keys::AUDIT_LOGS, &logs)?;
        Ok(entry)
    }

    /// Returns all audit entries, newest first.
    pub fn logs(&self) -> Vec<AuditLog> {
        let mut logs: Vec<AuditLog> = self.store.read_vec(keys::AUDIT_LOGS);
        logs.reverse();
        logs
    }

    /// Records a feedback submission and an accompanying audit entry.
    pub fn submit_feedback(
        &self,
        user_email: &str,
        rating: u8,
        comment: &str,
        project_name: &str,
    ) -> Result<UserFeedback> {
        let feedback = UserFeedback {
            id: Uuid::new_v4().to_string(),
            user_email: user_email.to_string(),
            rating,
            comment: comment.to_string(),
            submitted_at: Utc::now().to_rfc3339(),
            project_name: project_name.to_string(),
        };

        let mut list: Vec<UserFeedback> = self.store.read_vec(keys::FEEDBACK);
        list.push(feedback.clone());
        self.store.write(keys::FEEDBACK, &list)?;

        self.log(
            user_email,
            "FEEDBACK_SUBMITTED",
            &format!("Rating: {}/5 for {}", rating, project_name),
            RiskLevel::Low,
        )?;

        Ok(feedback)
    }

    /// Returns all feedback entries, newest first.
    pub fn feedback(&self) -> Vec<UserFeedback> {
        let mut list: Vec<UserFeedback> = self.store.read_vec(keys::FEEDBACK);
        list.reverse();
        list
    }

    /// The session id stamped onto entries recorded by this instance.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_logger() -> (TempDir, LoggerService) {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::new(temp_dir.path()).unwrap();
        (temp_dir, LoggerService::new(store))
    }

    #[test]
    fn test_log_appends_in_order() {
        let (_dir, logger) = test_logger();
        logger.log("a@b.c", "FIRST", "one", RiskLevel::Low).unwrap();
        logger.log("a@b.c", "SECOND", "two", RiskLevel::High).unwrap();

        let logs = logger.logs();
        assert_eq!(logs.len(), 2);
        // Newest first on read-back
        assert_eq!(logs[0].action, "SECOND");
        assert_eq!(logs[1].action, "FIRST");
    }

    #[test]
    fn test_empty_email_is_anonymous() {
        let (_dir, logger) = test_logger();
        let entry = logger.log("", "PING", "", RiskLevel::Low).unwrap();
        assert_eq!(entry.user_email, "ANONYMOUS");
    }

    #[test]
    fn test_cap_evicts_exactly_one_oldest() {
        let (_dir, logger) = test_logger();
        for i in 0..MAX_AUDIT_ENTRIES {
            logger
                .log("a@b.c", &format!("ACTION_{i}"), "", RiskLevel::Low)
                .unwrap();
        }

        let stored = logger.store.read_vec::<AuditLog>(keys::AUDIT_LOGS);
        assert_eq!(stored.len(), MAX_AUDIT_ENTRIES);
        assert_eq!(stored[0].action, "ACTION_0");

        // The 1001st insert evicts the single oldest entry.
        logger.log("a@b.c", "OVERFLOW", "", RiskLevel::Low).unwrap();
        let stored = logger.store.read_vec::<AuditLog>(keys::AUDIT_LOGS);
        assert_eq!(stored.len(), MAX_AUDIT_ENTRIES);
        assert_eq!(stored[0].action, "ACTION_1");
        assert_eq!(stored[MAX_AUDIT_ENTRIES - 1].action, "OVERFLOW");
    }

    #[test]
    fn test_feedback_also_writes_audit_entry() {
        let (_dir, logger) = test_logger();
        logger
            .submit_feedback("a@b.c", 4, "Solid plan", "CrumbShare")
            .unwrap();

        let feedback = logger.feedback();
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].rating, 4);

        let logs = logger.logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].action, "FEEDBACK_SUBMITTED");
        assert!(logs[0].details.contains("4/5"));
    }

    #[test]
    fn test_entries_carry_session_id() {
        let (_dir, logger) = test_logger();
        let entry = logger.log("a@b.c", "PING", "", RiskLevel::Low).unwrap();
        assert_eq!(entry.session_id, logger.session_id());
    }
}
