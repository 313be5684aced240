//! GeminiApiAgent - Direct REST API implementation for Gemini text generation.
//!
//! Carries both text operations of the product: schema-constrained plan
//! generation and the free-text idea rewrite. Credentials are resolved
//! through the core `SecretService` before any request is built.

use async_trait::async_trait;
use bizforge_core::config::AppConfig;
use bizforge_core::generation::{GenerationError, PlanGenerator};
use bizforge_core::language::Language;
use bizforge_core::legal::LEGAL_CONTRACT_TEMPLATE;
use bizforge_core::plan::StartupPlan;
use bizforge_core::secret::SecretService;
use bizforge_core::{prompt, schema};
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Agent implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    plan_model: String,
    improve_model: String,
    temperature: f32,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model settings.
    pub fn new(api_key: impl Into<String>, config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            plan_model: config.plan_model.clone(),
            improve_model: config.improve_model.clone(),
            temperature: config.temperature,
        }
    }

    /// Resolves the API key through the secret service and builds an agent.
    ///
    /// Fails fast with [`GenerationError::MissingCredentials`] when no usable
    /// key is configured - no network I/O happens on this path.
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

    /// Overrides the plan-generation model after construction.
    pub fn with_plan_model(mut self, model: impl Into<String>) -> Self {
        self.plan_model = model.into();
        self
    }

    /// Overrides the idea-improvement model after construction.
    pub fn with_improve_model(mut self, model: impl Into<String>) -> Self {
        self.improve_model = model.into();
        self
    }

    async fn send_request(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<String, GenerationError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = model,
            api_key = self.api_key
        );

        tracing::debug!(model, "sending generateContent request");

        let response = self.client.post(url).json(body).send().await.map_err(|err| {
            GenerationError::Transport {
                status_code: None,
                message: format!("Gemini API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
                retry_after: None,
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            GenerationError::Other(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl PlanGenerator for GeminiApiAgent {
    async fn generate_plan(
        &self,
        idea: &str,
        language: Language,
    ) -> Result<StartupPlan, GenerationError> {
        let system = prompt::plan_system_instruction(idea, language)
            .map_err(|err| GenerationError::Other(err.to_string()))?;
        let contents = prompt::plan_contents(idea, language)
            .map_err(|err| GenerationError::Other(err.to_string()))?;

        let request = GenerateContentRequest {
            contents: vec![Content::user(contents)],
            system_instruction: Some(Content::system(system)),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema::startup_plan_response_schema()),
                temperature: Some(self.temperature),
            }),
        };

        let text = self.send_request(&self.plan_model, &request).await?;
        parse_plan_text(&text)
    }

    async fn improve_idea(
        &self,
        idea: &str,
        language: Language,
    ) -> Result<String, GenerationError> {
        let prompt_text = prompt::improve_prompt(idea, language)
            .map_err(|err| GenerationError::Other(err.to_string()))?;

        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt_text)],
            system_instruction: None,
            generation_config: None,
        };

        let text = self.send_request(&self.improve_model, &request).await?;
        Ok(text.trim().to_string())
    }
}

/// Parses model output text into a plan and attaches the fixed legal doc.
///
/// The legal document is a client-side constant written after validation; it
/// is never part of what the model is asked to produce.
pub(crate) fn parse_plan_text(text: &str) -> Result<StartupPlan, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let mut plan: StartupPlan = serde_json::from_str(text)
        .map_err(|err| GenerationError::Validation(err.to_string()))?;
    plan.code.legal_doc = Some(LEGAL_CONTRACT_TEMPLATE.to_string());
    Ok(plan)
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: String) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text }],
        }
    }

    fn system(text: String) -> Self {
        Self {
            role: "system".to_string(),
            parts: vec![Part { text }],
        }
    }
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
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
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, GenerationError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or(GenerationError::EmptyResponse)
}

fn map_http_error(
    status: StatusCode,
    body: String,
    retry_after: Option<Duration>,
) -> GenerationError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    GenerationError::Transport {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
        retry_after,
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_response(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(ContentResponse {
                    parts: vec![PartResponse {
                        text: Some(text.to_string()),
                    }],
                }),
            }]),
        }
    }

    #[test]
    fn test_extract_text_from_first_candidate() {
        let text = extract_text_response(text_response("hello")).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_extract_text_no_candidates_is_empty_response() {
        let response = GenerateContentResponse { candidates: None };
        assert!(matches!(
            extract_text_response(response),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_plan_empty_text_is_empty_response() {
        assert!(matches!(
            parse_plan_text("   "),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_plan_invalid_json_is_validation_error() {
        let err = parse_plan_text("{ not json").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_plan_attaches_legal_doc() {
        let wire =
            serde_json::to_string(&bizforge_core::testing::sample_plan()).unwrap();
        let plan = parse_plan_text(&wire).unwrap();
        assert_eq!(plan.code.legal_doc.as_deref(), Some(LEGAL_CONTRACT_TEMPLATE));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("idea".to_string())],
            system_instruction: Some(Content::system("be brief".to_string())),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema::startup_plan_response_schema()),
                temperature: Some(0.8),
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["systemInstruction"]["parts"][0]["text"].is_string());
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_map_http_error_retryable_statuses() {
        let err = map_http_error(StatusCode::SERVICE_UNAVAILABLE, "{}".to_string(), None);
        assert!(err.is_retryable());
        let err = map_http_error(StatusCode::BAD_REQUEST, "{}".to_string(), None);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_map_http_error_extracts_api_message() {
        let body = r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string(), None);
        match err {
            GenerationError::Transport { message, .. } => {
                assert_eq!(message, "RESOURCE_EXHAUSTED: quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        let header = HeaderValue::from_static("30");
        assert_eq!(
            parse_retry_after(Some(&header)),
            Some(Duration::from_secs(30))
        );
        assert_eq!(parse_retry_after(None), None);
    }
}
