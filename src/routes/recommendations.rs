use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{ModeKind, RankingMode, Rationale, ScoredCandidate, Tone, UserPreferences},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub mode: ModeKind,
    #[serde(default)]
    pub explore_strength: Option<f64>,
    #[serde(default)]
    pub k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationItem {
    pub rank: usize,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub tone: Tone,
    pub genres: Vec<String>,
    pub popularity: f64,
    pub score: f64,
    pub reasons: Vec<Rationale>,
}

impl RecommendationItem {
    fn from_candidate(rank: usize, candidate: ScoredCandidate) -> Self {
        Self {
            rank,
            title: candidate.book.title,
            author: candidate.book.author,
            year: candidate.book.year,
            tone: candidate.book.tone,
            genres: candidate.book.genres,
            popularity: candidate.book.popularity,
            score: candidate.score,
            reasons: candidate.reasons,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub mode: ModeKind,
    /// Only reported for discover mode
    pub explore_strength: Option<f64>,
    pub current_year: i32,
    pub recommendations: Vec<RecommendationItem>,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let k = request.k.unwrap_or(state.default_result_count);
    if k == 0 || k > state.max_result_count {
        return Err(AppError::InvalidInput(format!(
            "k must be between 1 and {}",
            state.max_result_count
        )));
    }

    let mode = RankingMode::new(
        request.mode,
        request
            .explore_strength
            .unwrap_or(state.default_explore_strength),
    );

    tracing::info!(
        request_id = %request_id,
        provider = state.catalog.name(),
        genres = request.preferences.genres.len(),
        recent_only = request.preferences.recent_only,
        mode = ?mode.kind(),
        k,
        "Processing recommendation request"
    );

    let catalog = state.catalog.catalog().await?;
    let picks = state
        .recommender
        .recommend(&catalog, &request.preferences, mode, k);

    if picks.is_empty() {
        tracing::info!(request_id = %request_id, "No books matched the requested filters");
    }

    let recommendations = picks
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| RecommendationItem::from_candidate(index + 1, candidate))
        .collect();

    Ok(Json(RecommendationResponse {
        mode: mode.kind(),
        explore_strength: mode.explore_strength(),
        current_year: state.recommender.current_year(),
        recommendations,
    }))
}
