use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use super::AppState;
use crate::classification::KeywordDictionary;

/// Handler for GET /v1/keywords/default: the dictionary used when a request brings none.
pub async fn default_keywords_handler(State(state): State<Arc<AppState>>) -> Json<KeywordDictionary> {
    Json(state.default_dictionary.clone())
}
