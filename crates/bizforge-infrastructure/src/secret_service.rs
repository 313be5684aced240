//! Secret configuration loading.
//!
//! Resolves the generation API credential from the environment first
//! (`GEMINI_API_KEY`, then `API_KEY`), falling back to
//! `~/.config/bizforge/secret.json`. The absence of any credential is
//! surfaced to callers before they attempt a generation call.

use std::path::PathBuf;

use bizforge_core::config::{GeminiConfig, SecretConfig};
use bizforge_core::error::Result;
use bizforge_core::secret::SecretService;

use crate::paths::BizforgePaths;

const ENV_KEYS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// File- and environment-backed [`SecretService`] implementation.
pub struct SecretServiceImpl {
    path: PathBuf,
}

impl SecretServiceImpl {
    /// Creates a service reading from the default secret file location.
    pub fn new() -> Result<Self> {
        let path = BizforgePaths::secret_file()
            .map_err(|e| bizforge_core::BizforgeError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a service reading from a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn env_override() -> Option<SecretConfig> {
        for key in ENV_KEYS {
            if let Ok(value) = std::env::var(key) {
                if !value.trim().is_empty() {
                    return Some(SecretConfig {
                        gemini: Some(GeminiConfig {
                            api_key: value,
                            model_name: None,
                        }),
                    });
                }
            }
        }
        None
    }

    fn load_from_file(&self) -> std::result::Result<SecretConfig, String> {
        if !self.path.exists() {
            return Err(format!(
                "Secret file not found at: {}",
                self.path.display()
            ));
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read secret file: {e}"))?;

        serde_json::from_str(&content).map_err(|e| format!("Failed to parse secret file: {e}"))
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> std::result::Result<SecretConfig, String> {
        if let Some(config) = Self::env_override() {
            return Ok(config);
        }
        self.load_from_file()
    }

    async fn secret_file_exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Env-override behavior is not covered here: process environment is
    // shared across the test harness, so these tests stick to file loading.

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        std::fs::write(
            &path,
            r#"{ "gemini": { "api_key": "file-key", "model_name": "gemini-pro" } }"#,
        )
        .unwrap();

        let service = SecretServiceImpl::with_path(path);
        let config = service.load_from_file().unwrap();
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "file-key");
        assert_eq!(gemini.model_name.as_deref(), Some("gemini-pro"));
        assert!(service.secret_file_exists().await);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let service = SecretServiceImpl::with_path(temp_dir.path().join("secret.json"));
        assert!(service.load_from_file().is_err());
        assert!(!service.secret_file_exists().await);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        std::fs::write(&path, "{ invalid").unwrap();

        let service = SecretServiceImpl::with_path(path);
        assert!(service.load_from_file().is_err());
    }
}
