//! Application and secret configuration models.
//!
//! `AppConfig` is read from `config.toml`; `SecretConfig` from `secret.json`.
//! Both files live in the platform config directory and are optional - every
//! field has a default so a missing file yields a usable configuration.

use serde::{Deserialize, Serialize};

/// Tunable generation settings loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model used for full plan generation.
    pub plan_model: String,
    /// Model used for the one-sentence idea rewrite.
    pub improve_model: String,
    /// Model used for marketing imagery.
    pub image_model: String,
    /// Sampling temperature for plan generation.
    pub temperature: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plan_model: "gemini-3-pro-preview".to_string(),
            improve_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            temperature: 0.8,
        }
    }
}

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.plan_model, "gemini-3-pro-preview");
        assert_eq!(config.temperature, 0.8);
    }

    #[test]
    fn test_app_config_partial_override() {
        let config: AppConfig = toml::from_str("temperature = 0.2").unwrap();
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.improve_model, "gemini-3-flash-preview");
    }

    #[test]
    fn test_secret_config_empty_json() {
        let config: SecretConfig = serde_json::from_str("{}").unwrap();
        assert!(config.gemini.is_none());
    }
}
