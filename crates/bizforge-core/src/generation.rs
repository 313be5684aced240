//! Remote generation contract: error taxonomy, per-operation failure policy,
//! and the traits the interaction layer implements.
//!
//! The error variants are deliberately distinct so a caller could retry only
//! on transport failures; nothing in this crate retries automatically.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::BizforgeError;
use crate::language::Language;
use crate::plan::StartupPlan;

/// Errors raised by the remote generation calls.
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    /// No API credential was available. Raised before any network I/O.
    #[error("API credential not configured")]
    MissingCredentials,

    /// Network or HTTP-level failure.
    #[error("Transport error{}: {message}", .status_code.map(|c| format!(" (status {c})")).unwrap_or_default())]
    Transport {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// The model returned no usable content at all.
    #[error("Model returned an empty result")]
    EmptyResponse,

    /// The model returned text that did not conform to the expected shape.
    #[error("Model output failed validation: {0}")]
    Validation(String),

    /// Anything that does not fit the other variants.
    #[error("{0}")]
    Other(String),
}

impl GenerationError {
    /// True only for transport failures the endpoint marked as retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                is_retryable: true,
                ..
            }
        )
    }

    /// True when the response arrived but did not parse against the schema.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<GenerationError> for BizforgeError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::MissingCredentials => {
                BizforgeError::Config("API credential not configured".to_string())
            }
            other => BizforgeError::Generation(other.to_string()),
        }
    }
}

/// How a failed generation call is resolved for the caller.
///
/// The asymmetry between operations is intentional and kept visible here
/// instead of being scattered across ad hoc error handling: idea improvement
/// degrades silently to its input, while plan and asset generation surface
/// their errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Errors propagate to the caller.
    Propagate,
    /// Errors are swallowed and the original input is returned unchanged.
    FallbackToInput,
}

impl FailurePolicy {
    /// Applies the policy to a textual generation result.
    pub fn resolve(
        self,
        result: Result<String, GenerationError>,
        input: &str,
    ) -> Result<String, GenerationError> {
        match (self, result) {
            (FailurePolicy::FallbackToInput, Err(_)) => Ok(input.to_string()),
            (_, other) => other,
        }
    }
}

/// Produces structured startup plans and polished idea rewrites.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generates a full [`StartupPlan`] for the idea, with display text in
    /// the requested language. The returned plan always carries the fixed
    /// legal document on `code.legal_doc`.
    async fn generate_plan(
        &self,
        idea: &str,
        language: Language,
    ) -> Result<StartupPlan, GenerationError>;

    /// Rewrites free text into a single polished sentence in the requested
    /// language. Errors propagate; silent degradation is applied by the
    /// caller via [`FailurePolicy::FallbackToInput`].
    async fn improve_idea(&self, idea: &str, language: Language)
    -> Result<String, GenerationError>;
}

/// Produces promotional imagery for a brand name.
#[async_trait]
pub trait AssetGenerator: Send + Sync {
    /// Returns a `data:<mime>;base64,<payload>` URI for the first image the
    /// model produced. There is no sensible default image, so failures
    /// propagate.
    async fn generate_marketing_asset(&self, brand_name: &str)
    -> Result<String, GenerationError>;
}
