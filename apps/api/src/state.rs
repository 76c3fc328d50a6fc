use std::sync::Arc;

use crate::llm_client::GenerationBackend;

/// Shared application state injected into all route handlers via Axum
/// extractors. Both handles are stateless and safe for concurrent reuse —
/// no mutable state is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend, injected at startup. Trait object so tests and
    /// future backends swap in without touching handler code.
    pub backend: Arc<dyn GenerationBackend>,
    /// HTTP client for the job-posting fetcher.
    pub http: reqwest::Client,
}
