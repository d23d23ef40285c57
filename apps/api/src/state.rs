use crate::llm_client::InferenceClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated by requests.
#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
}
