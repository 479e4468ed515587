pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::careers::handlers as careers;
use crate::chat::handlers as chat;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Career suggestion (flow A)
        .route("/api/v1/quiz", get(careers::handle_quiz))
        .route("/api/v1/careers/suggest", post(careers::handle_suggest))
        // Chat assistant (flow B)
        .route("/api/v1/chat", post(chat::handle_chat))
        .with_state(state)
}
