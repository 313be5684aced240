//! REST agents for the hosted generation endpoints.
//!
//! `GeminiApiAgent` implements the text contract (plan generation, idea
//! improvement); `GeminiImageAgent` implements the marketing-asset contract.
//! Both talk to the Gemini REST API directly without CLI dependency.

pub mod gemini_api_agent;
pub mod gemini_image_agent;

pub use gemini_api_agent::GeminiApiAgent;
pub use gemini_image_agent::GeminiImageAgent;
