//! GeminiImageAgent - REST implementation for marketing imagery.
//!
//! Produces a single promotional image for a brand name. Unlike the idea
//! rewrite there is no sensible default image, so every failure propagates.

use async_trait::async_trait;
use bizforge_core::config::AppConfig;
use bizforge_core::generation::{AssetGenerator, GenerationError};
use bizforge_core::prompt;
use bizforge_core::secret::SecretService;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const ASPECT_RATIO: &str = "16:9";

/// Agent implementation for the Gemini image endpoint.
#[derive(Clone)]
pub struct GeminiImageAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiImageAgent {
    /// Creates a new agent with the provided API key and image model.
    pub fn new(api_key: impl Into<String>, config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: config.image_model.clone(),
        }
    }

    /// Resolves the API key through the secret service and builds an agent.
    pub async fn from_secret_service(
        service: &dyn SecretService,
        config: &AppConfig,
    ) -> Result<Self, GenerationError> {
        let secrets = service
            .load_secrets()
            .await
            .map_err(|_| GenerationError::MissingCredentials)?;

        let gemini = secrets.gemini.ok_or(GenerationError::MissingCredentials)?;
        if gemini.api_key.trim().is_empty() {
            return Err(GenerationError::MissingCredentials);
        }

        Ok(Self::new(gemini.api_key, config))
    }

    /// Overrides the image model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl AssetGenerator for GeminiImageAgent {
    async fn generate_marketing_asset(
        &self,
        brand_name: &str,
    ) -> Result<String, GenerationError> {
        let prompt_text = prompt::asset_prompt(brand_name)
            .map_err(|err| GenerationError::Other(err.to_string()))?;

        let request = GenerateImageRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt_text }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: ASPECT_RATIO.to_string(),
                },
            },
        };

        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        tracing::debug!(model = %self.model, brand_name, "sending image request");

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| GenerationError::Transport {
                status_code: None,
                message: format!("Gemini image request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
                retry_after: None,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(GenerationError::Transport {
                status_code: Some(status.as_u16()),
                message: body_text,
                is_retryable: status.is_server_error(),
                retry_after: None,
            });
        }

        let parsed: GenerateImageResponse = response.json().await.map_err(|err| {
            GenerationError::Other(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_image_data_uri(parsed)
    }
}

#[derive(Serialize)]
struct GenerateImageRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    image_config: ImageConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Deserialize)]
struct GenerateImageResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    #[allow(dead_code)]
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Assembles a data URI from the first inline-data part of the response.
fn extract_image_data_uri(response: GenerateImageResponse) -> Result<String, GenerationError> {
    response
        .candidates
        .and_then(|mut candidates| {
            if candidates.is_empty() {
                None
            } else {
                Some(candidates.remove(0))
            }
        })
        .and_then(|candidate| candidate.content)
        .and_then(|content| {
            content
                .parts
                .into_iter()
                .find_map(|part| part.inline_data)
        })
        .map(|inline| format!("data:{};base64,{}", inline.mime_type, inline.data))
        .ok_or(GenerationError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_image_from_inline_data() {
        let response: GenerateImageResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            { "text": "Here is your image" },
                            { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
                        ]
                    }
                }]
            }"#,
        )
        .unwrap();

        let uri = extract_image_data_uri(response).unwrap();
        assert_eq!(uri, "data:image/png;base64,QUJD");
    }

    #[test]
    fn test_text_only_response_is_empty() {
        let response: GenerateImageResponse = serde_json::from_str(
            r#"{ "candidates": [{ "content": { "parts": [{ "text": "no image" }] } }] }"#,
        )
        .unwrap();
        assert!(matches!(
            extract_image_data_uri(response),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_no_candidates_is_empty() {
        let response: GenerateImageResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            extract_image_data_uri(response),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_request_serializes_image_config() {
        let request = GenerateImageRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "brand".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: ASPECT_RATIO.to_string(),
                },
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["generationConfig"]["imageConfig"]["aspectRatio"],
            "16:9"
        );
    }
}
