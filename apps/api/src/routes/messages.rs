use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::message::SavedMessage;
use crate::state::AppState;
use crate::store::RECENT_LIMIT;

#[derive(Debug, Deserialize)]
pub struct SaveMessageRequest {
    pub emotion: String,
    pub language: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SaveMessageResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SavedMessagesResponse {
    pub messages: Vec<SavedMessage>,
}

/// POST /api/save-message
///
/// No idempotency key: saving identical content twice creates two records with
/// distinct ids.
pub async fn handle_save_message(
    State(state): State<AppState>,
    Json(req): Json<SaveMessageRequest>,
) -> Result<Json<SaveMessageResponse>, AppError> {
    let saved = SavedMessage::new(req.emotion, req.language, req.message);

    state.store.insert(&saved).await?;

    info!("Saved message with id={}", saved.id);

    Ok(Json(SaveMessageResponse {
        id: saved.id,
        message: "Message saved successfully".to_string(),
    }))
}

/// GET /api/saved-messages
///
/// Newest first, capped at 50 records.
pub async fn handle_saved_messages(
    State(state): State<AppState>,
) -> Result<Json<SavedMessagesResponse>, AppError> {
    let messages = state.store.recent(RECENT_LIMIT).await?;

    info!("Retrieved {} saved messages", messages.len());

    Ok(Json(SavedMessagesResponse { messages }))
}
