use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::engine::Recommendation;
use crate::errors::AppError;
use crate::state::AppState;

/// Default and upper bound for `top_k`, the public API contract.
const DEFAULT_TOP_K: usize = 5;
const MAX_TOP_K: usize = 20;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub goal: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// POST /api/v1/recommend
///
/// Boundary validation lives here: the engine accepts any positive k and
/// any text, the API does not.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<Recommendation>, AppError> {
    let goal = req.goal.trim();
    if goal.is_empty() {
        return Err(AppError::Validation("goal must not be empty".to_string()));
    }
    if req.top_k == 0 || req.top_k > MAX_TOP_K {
        return Err(AppError::Validation(format!(
            "top_k must be between 1 and {MAX_TOP_K}"
        )));
    }

    let result = state.engine.recommend(goal, req.top_k)?;
    Ok(Json(result))
}

/// GET /api/v1/content
pub async fn handle_list_content(State(state): State<AppState>) -> Json<Value> {
    let items = state.engine.catalog().items();
    Json(json!({
        "total_items": items.len(),
        "content": items,
    }))
}

/// GET /api/v1/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<Value> {
    let dimensions = state.engine.skill_space().names();
    Json(json!({
        "skill_dimensions": dimensions,
        "total_dimensions": dimensions.len(),
    }))
}

/// GET /api/v1/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<Value> {
    // BTreeMap keeps the category key order stable across responses.
    let mut content_types: BTreeMap<&str, usize> = BTreeMap::new();
    for item in state.engine.catalog().items() {
        *content_types.entry(item.category.as_str()).or_insert(0) += 1;
    }
    Json(json!({
        "total_content_items": state.engine.catalog().len(),
        "skill_dimensions": state.engine.skill_space().names(),
        "content_types": content_types,
    }))
}
