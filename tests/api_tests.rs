use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use book_recommender::{
    config::Config,
    routes::{create_router, AppState},
    services::DemoCatalog,
};

fn create_test_server() -> TestServer {
    let config = Config {
        current_year: Some(2025),
        ..Config::default()
    };
    let state = Arc::new(AppState::new(Arc::new(DemoCatalog::new()), &config));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn titles(body: &Value) -> Vec<String> {
    body["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_catalog_lists_demo_books() {
    let server = create_test_server();
    let response = server.get("/api/v1/catalog").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["provider"], "demo");
    assert_eq!(body["books"].as_array().unwrap().len(), 12);
    assert_eq!(body["books"][0]["tone"], "calm");
}

#[tokio::test]
async fn test_famous_recommendations() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "genres": ["판타지"],
            "tone": "모험",
            "mode": "famous",
            "k": 3
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["mode"], "famous");
    assert!(body["explore_strength"].is_null());
    assert_eq!(body["current_year"], 2025);

    let first = &body["recommendations"][0];
    assert_eq!(first["rank"], 1);
    assert_eq!(first["title"], "해리 포터와 마법사의 돌");
    assert_eq!(
        first["reasons"],
        json!(["genre match", "tone match", "popularity boost"])
    );
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_recent_only_recommendations() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "recent_only": true,
            "mode": "balanced",
            "k": 5
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let titles = titles(&body);
    assert_eq!(titles.len(), 4);
    assert!(!titles.contains(&"나의 산책은 길에서 시작된다".to_string()));
    for item in body["recommendations"].as_array().unwrap() {
        assert!(item["year"].as_i64().unwrap() >= 2020);
    }
}

#[tokio::test]
async fn test_discover_recommendations() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({
            "genres": ["소설"],
            "mode": "discover",
            "explore_strength": 1.0,
            "k": 3
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["explore_strength"], 1.0);
    let titles = titles(&body);
    assert_eq!(titles[0], "바람이 그린 지도");
    assert_eq!(titles[1], "도시의 낮은 별들");
    assert!(!titles.contains(&"해리 포터와 마법사의 돌".to_string()));
}

#[tokio::test]
async fn test_default_result_count() {
    let server = create_test_server();
    let response = server.post("/api/v1/recommendations").json(&json!({})).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["mode"], "famous");
    assert_eq!(titles(&body).len(), 5);
}

#[tokio::test]
async fn test_invalid_k_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "k": 0 }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "k": 11 }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_mode_is_rejected() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/recommendations")
        .json(&json!({ "mode": "trending" }))
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_prompt_generation() {
    let server = create_test_server();
    let response = server
        .post("/api/v1/prompt")
        .json(&json!({
            "genres": ["SF", "소설"],
            "tone": "thrilling",
            "avoid": ["고어"],
            "liked_books": ["Project Hail Mary"],
            "length": "short",
            "recent_only": true,
            "mode": "discover",
            "explore_strength": 0.3
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("발굴 우선(실험성 30%)"));
    assert!(prompt.contains("최근 5년만"));
    assert!(prompt.contains("SF, 소설"));
    assert!(prompt.contains("스릴"));
    assert!(prompt.contains("고어"));
    assert!(prompt.contains("Project Hail Mary"));
    assert!(prompt.contains("짧게"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let request_id = "7b0c5f3e-2f6a-4d7e-9a51-1c2d3e4f5a6b";
    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static(request_id),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), request_id);
}
