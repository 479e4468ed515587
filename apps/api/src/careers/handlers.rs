//! Axum route handlers for the career suggestion flow.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::careers::resolver::resolve;
use crate::errors::AppError;
use crate::personality::quiz::{QuizQuestion, QUESTIONS};
use crate::personality::QuizAnswers;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub skills: String,
    pub answers: QuizAnswers,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub type_code: String,
    pub careers: Vec<String>,
}

/// GET /api/v1/quiz
pub async fn handle_quiz() -> Json<&'static [QuizQuestion]> {
    Json(QUESTIONS.as_slice())
}

/// POST /api/v1/careers/suggest
///
/// Encodes the quiz answers and resolves careers against the static tables.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    if request.skills.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter at least one skill.".to_string(),
        ));
    }

    let type_code = request.answers.type_code();
    let suggestion = resolve(&state.catalog, &request.skills, type_code.as_str());
    debug!(
        "Resolved {} careers for type {}",
        suggestion.careers.len(),
        suggestion.type_code
    );

    Ok(Json(SuggestResponse {
        type_code: suggestion.type_code,
        careers: suggestion.careers,
    }))
}
