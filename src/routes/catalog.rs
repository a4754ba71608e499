use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::{error::AppResult, models::BookRecord, routes::AppState};

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub provider: &'static str,
    pub books: Vec<BookRecord>,
}

/// Handler for listing the catalog being scored
pub async fn list_books(State(state): State<Arc<AppState>>) -> AppResult<Json<CatalogResponse>> {
    let books = state.catalog.catalog().await?;
    Ok(Json(CatalogResponse {
        provider: state.catalog.name(),
        books,
    }))
}
