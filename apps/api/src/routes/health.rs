use axum::Json;
use serde_json::{json, Value};

/// GET /api/
/// Static acknowledgment that the service is up.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "MoodMate API is running" }))
}
