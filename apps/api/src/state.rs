use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::store::MessageStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Saved-message store behind a trait object so tests can swap in a stub.
    pub store: Arc<dyn MessageStore>,
    pub llm: LlmClient,
}
