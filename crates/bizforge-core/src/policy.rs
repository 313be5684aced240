//! Privileged-access policy.
//!
//! Determines whether a login attempt unlocks the admin surface (global
//! ledger, audit log viewer). The decision is a pluggable predicate so a real
//! deployment can swap in actual authentication without touching calling
//! code.

/// Decides whether a credential pair is privileged.
pub trait AdminPolicy: Send + Sync {
    /// Returns true when the supplied credentials unlock admin access.
    fn is_privileged(&self, email: &str, secret: &str) -> bool;
}

/// Deterministic policy comparing against two configured literals.
///
/// # Security Note
///
/// This is NOT a security boundary: the literals ship inside the client
/// binary and the comparison runs on the caller's machine. It exists to
/// reproduce the deterministic unlock behavior of the original product and
/// must be replaced with real authentication before any production use.
pub struct StaticAdminPolicy {
    email: String,
    secret: String,
}

impl StaticAdminPolicy {
    pub fn new(email: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            secret: secret.into(),
        }
    }
}

impl Default for StaticAdminPolicy {
    fn default() -> Self {
        Self::new("architect@bizforge.app", "Forge@Master#2026")
    }
}

impl AdminPolicy for StaticAdminPolicy {
    fn is_privileged(&self, email: &str, secret: &str) -> bool {
        email == self.email && secret == self.secret
    }
}

/// Policy that never grants admin access. Useful for tests and for builds
/// that must not expose the admin surface at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllAdminPolicy;

impl AdminPolicy for DenyAllAdminPolicy {
    fn is_privileged(&self, _email: &str, _secret: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_policy_exact_match_only() {
        let policy = StaticAdminPolicy::new("root@example.com", "s3cret");
        assert!(policy.is_privileged("root@example.com", "s3cret"));
        assert!(!policy.is_privileged("root@example.com", "wrong"));
        assert!(!policy.is_privileged("other@example.com", "s3cret"));
    }

    #[test]
    fn test_deny_all() {
        let policy = DenyAllAdminPolicy;
        assert!(!policy.is_privileged("architect@bizforge.app", "Forge@Master#2026"));
    }
}
