use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{CatalogProvider, Recommender},
};

pub mod catalog;
pub mod prompt;
pub mod recommendations;

/// State shared by every handler
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub recommender: Recommender,
    pub default_result_count: usize,
    pub max_result_count: usize,
    pub default_explore_strength: f64,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: &Config) -> Self {
        Self {
            catalog,
            recommender: Recommender::new(config.reference_year())
                .with_recent_years(config.recent_years),
            default_result_count: config.default_result_count,
            max_result_count: config.max_result_count,
            default_explore_strength: config.default_explore_strength,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/catalog", get(catalog::list_books))
        .route("/recommendations", post(recommendations::recommend))
        .route("/prompt", post(prompt::generate_prompt))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        middleware::request_id::REQUEST_ID_HEADER,
        services::{catalog::MockCatalogProvider, DemoCatalog},
    };
    use axum::{body::Body, http::Request};
    use axum_test::TestServer;
    use tower::ServiceExt;

    fn server_with(catalog: MockCatalogProvider) -> TestServer {
        let config = Config {
            current_year: Some(2025),
            ..Config::default()
        };
        let state = Arc::new(AppState::new(Arc::new(catalog), &config));
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_catalog_failure_maps_to_server_error() {
        let mut catalog = MockCatalogProvider::new();
        catalog
            .expect_catalog()
            .returning(|| Err(AppError::Catalog("backing store unavailable".to_string())));
        catalog.expect_name().return_const("mock");

        let server = server_with(catalog);
        let response = server
            .post("/api/v1/recommendations")
            .json(&json!({ "genres": ["소설"] }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("backing store unavailable"));
    }

    #[tokio::test]
    async fn test_empty_catalog_gives_empty_recommendations() {
        let mut catalog = MockCatalogProvider::new();
        catalog.expect_catalog().times(1).returning(|| Ok(vec![]));
        catalog.expect_name().return_const("mock");

        let server = server_with(catalog);
        let response = server
            .post("/api/v1/recommendations")
            .json(&json!({ "mode": "discover", "explore_strength": 0.9 }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_router_serves_health_with_request_id() {
        let config = Config {
            current_year: Some(2025),
            ..Config::default()
        };
        let state = Arc::new(AppState::new(Arc::new(DemoCatalog::new()), &config));

        let response = create_router(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }
}
