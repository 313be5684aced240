//! Unified path management for BizForge configuration and data files.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config/data directory could not be determined.
    BaseDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::BaseDirNotFound => write!(f, "Cannot find platform base directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for BizForge.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/bizforge/          # Config directory
/// ├── config.toml              # Generation settings
/// └── secret.json              # API keys
///
/// ~/.local/share/bizforge/     # Data directory
/// └── store/                   # LocalStore key files
///     ├── bizforge_user.json
///     ├── bizforge_vault.json
///     ├── bizforge_global_ledger.json
///     ├── bizforge_audit_logs.json
///     └── bizforge_user_feedback.json
/// ```
pub struct BizforgePaths;

impl BizforgePaths {
    /// Returns the BizForge configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("bizforge"))
            .ok_or(PathError::BaseDirNotFound)
    }

    /// Returns the BizForge data directory.
    ///
    /// This is used for the persistence store, which can grow larger than
    /// configuration files.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("bizforge"))
            .ok_or(PathError::BaseDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the directory holding the LocalStore key files.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }

    /// Ensures the secret file exists, creating it with a template if it doesn't.
    ///
    /// The template includes an empty Gemini key placeholder. On Unix the file
    /// permissions are set to 600 (user read/write only).
    pub fn ensure_secret_file() -> Result<PathBuf, std::io::Error> {
        use bizforge_core::config::{GeminiConfig, SecretConfig};

        let secret_path = Self::secret_file()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))?;

        if secret_path.exists() {
            return Ok(secret_path);
        }

        if let Some(parent) = secret_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template_config = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: None,
            }),
        };

        let template_json = serde_json::to_string_pretty(&template_config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        std::fs::write(&secret_path, template_json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&secret_path, permissions)?;
        }

        Ok(secret_path)
    }
}
