/// LLM Client — the single point of entry for all remote inference calls.
///
/// Every request negotiates its model afresh: list the models the service
/// currently advertises for content generation, take the configured model if
/// it is among them, else the first advertised one. The model list is never
/// cached across requests, and failed calls are not retried.
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

pub mod gemini;

pub use gemini::GeminiBackend;

/// The generation method a model must advertise to be eligible.
pub const GENERATE_CONTENT: &str = "generateContent";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no models supporting generateContent are available")]
    NoModelsAvailable,

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A model as advertised by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub name: String,
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT)
    }
}

/// The two remote operations the inference client depends on.
/// `GeminiBackend` talks to the real service; tests substitute fakes.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Every model the service advertises, in the order it returns them.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError>;

    /// Raw text produced by `model` for `prompt`.
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}

/// Configured model if advertised, else the first advertised model.
pub fn select_model(preferred: &str, available: &[String]) -> Result<String, LlmError> {
    if available.iter().any(|m| m == preferred) {
        return Ok(preferred.to_string());
    }
    available
        .first()
        .cloned()
        .ok_or(LlmError::NoModelsAvailable)
}

#[derive(Clone)]
pub struct InferenceClient {
    backend: Arc<dyn GenerativeBackend>,
    preferred_model: String,
}

impl InferenceClient {
    pub fn new(backend: Arc<dyn GenerativeBackend>, preferred_model: String) -> Self {
        Self {
            backend,
            preferred_model,
        }
    }

    pub fn preferred_model(&self) -> &str {
        &self.preferred_model
    }

    /// Two round-trips: list models, then generate with the chosen one.
    pub async fn run_inference(&self, prompt: &str) -> Result<String, LlmError> {
        let available: Vec<String> = self
            .backend
            .list_models()
            .await?
            .into_iter()
            .filter(ModelInfo::supports_generate_content)
            .map(|m| m.name)
            .collect();
        info!(models = ?available, "Available models");

        let model = select_model(&self.preferred_model, &available)?;
        info!(model = %model, "Using model");

        let text = self.backend.generate_content(&model, prompt).await?;
        debug!(chars = text.len(), "Generation finished");

        Ok(text)
    }
}
