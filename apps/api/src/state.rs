use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client used for posting-page fetches.
    pub http: reqwest::Client,
    /// Pluggable completion service. Default: `OpenAiClient`. Tests inject a fake.
    pub completion: Arc<dyn CompletionService>,
}
