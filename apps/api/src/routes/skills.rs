use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub skills: Vec<String>,
}

/// GET /api/v1/skills
/// Lists the recognized skills in match order.
pub async fn vocabulary_handler(State(state): State<AppState>) -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        skills: state.vocabulary.names().map(String::from).collect(),
    })
}
