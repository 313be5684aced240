//! Audit log and user feedback event records.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Risk classification attached to every audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// One append-only audit event.
///
/// The stored log is capped: when full, the oldest entries are dropped before
/// a new entry is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub timestamp: String,
    pub user_email: String,
    pub action: String,
    pub details: String,
    /// Identifies the logger instance that recorded the entry.
    pub session_id: String,
    pub risk_level: RiskLevel,
}

/// One user feedback submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFeedback {
    pub id: String,
    pub user_email: String,
    pub rating: u8,
    pub comment: String,
    pub submitted_at: String,
    pub project_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_serializes_screaming() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"CRITICAL\""
        );
        assert_eq!(RiskLevel::Low.to_string(), "LOW");
    }

    #[test]
    fn test_audit_log_wire_format() {
        let entry = AuditLog {
            id: "l-1".into(),
            timestamp: "2026-01-01T00:00:00Z".into(),
            user_email: "a@b.c".into(),
            action: "LOGIN_EVENT".into(),
            details: "Authenticated".into(),
            session_id: "s-1".into(),
            risk_level: RiskLevel::Low,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["riskLevel"], "LOW");
        assert!(json["sessionId"].is_string());
        assert!(json["userEmail"].is_string());
    }
}
