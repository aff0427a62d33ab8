use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::generate_message;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateMessageRequest {
    pub emotion: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateMessageResponse {
    pub message: String,
    pub emotion: String,
    pub language: String,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/generate-message
///
/// Always answers 200 with a non-empty message: generation degrades to the
/// per-language fallback internally and never surfaces an LLM failure here.
/// The response echoes the request's emotion and language and stamps a fresh
/// server timestamp.
pub async fn handle_generate_message(
    State(state): State<AppState>,
    Json(req): Json<GenerateMessageRequest>,
) -> Result<Json<GenerateMessageResponse>, AppError> {
    info!(
        "Generating message for emotion={}, language={}",
        req.emotion, req.language
    );

    let generated = generate_message(&state.llm, &req.emotion, &req.language).await;

    Ok(Json(GenerateMessageResponse {
        message: generated.into_text(),
        emotion: req.emotion,
        language: req.language,
        timestamp: Utc::now(),
    }))
}
