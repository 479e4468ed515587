use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub question: String,
    pub answer: String,
}

/// POST /api/v1/chat
///
/// Gateway failures come back as placeholder text in `answer`, not as an
/// error status.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("Please type something.".to_string()));
    }

    info!("Chat question received ({} chars)", request.question.len());
    let answer = state.assistant.query(&request.question).await;

    Ok(Json(ChatResponse {
        question: request.question,
        answer,
    }))
}
