//! Application configuration loading.

use std::path::PathBuf;

use bizforge_core::config::AppConfig;
use bizforge_core::error::Result;

use crate::paths::BizforgePaths;

/// Loads [`AppConfig`] from `config.toml`.
///
/// A missing file yields the defaults; a malformed file is an error rather
/// than a silent fallback, so a typo in the config does not quietly change
/// model selection.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service reading from the default config file location.
    pub fn new() -> Result<Self> {
        let path = BizforgePaths::config_file()
            .map_err(|e| bizforge_core::BizforgeError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a service reading from a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration, falling back to defaults when absent.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        let config = service.load().unwrap();
        assert_eq!(config.plan_model, AppConfig::default().plan_model);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "plan_model = \"gemini-experimental\"\ntemperature = 0.3\n")
            .unwrap();

        let config = ConfigService::with_path(path).load().unwrap();
        assert_eq!(config.plan_model, "gemini-experimental");
        assert_eq!(config.temperature, 0.3);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "plan_model = [not toml").unwrap();

        let result = ConfigService::with_path(path).load();
        assert!(result.unwrap_err().is_serialization());
    }
}
