use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    middleware::request_id::RequestId,
    models::{ModeKind, RankingMode, UserPreferences},
    routes::AppState,
    services::prompt,
};

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(flatten)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub mode: ModeKind,
    #[serde(default)]
    pub explore_strength: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

/// Handler for prompt generation endpoint
pub async fn generate_prompt(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<PromptRequest>,
) -> Json<PromptResponse> {
    let mode = RankingMode::new(
        request.mode,
        request
            .explore_strength
            .unwrap_or(state.default_explore_strength),
    );

    let prompt = prompt::build_prompt(
        &request.preferences,
        mode,
        state.recommender.recent_years(),
    );

    tracing::info!(
        request_id = %request_id,
        mode = ?mode.kind(),
        prompt_chars = prompt.chars().count(),
        "Generated prompt"
    );

    Json(PromptResponse { prompt })
}
