pub mod health;
pub mod messages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate_message;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/", get(health::root_handler))
        .route("/api/generate-message", post(handle_generate_message))
        .route("/api/save-message", post(messages::handle_save_message))
        .route("/api/saved-messages", get(messages::handle_saved_messages))
        .with_state(state)
}
