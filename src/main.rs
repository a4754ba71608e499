use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use book_recommender::{
    config::Config,
    routes::{create_router, AppState},
    services::{CatalogProvider, DemoCatalog, JsonFileCatalog},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("book_recommender=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog: Arc<dyn CatalogProvider> = match &config.catalog_path {
        Some(path) => Arc::new(
            JsonFileCatalog::load(path)
                .await
                .with_context(|| format!("failed to load catalog from {}", path))?,
        ),
        None => Arc::new(DemoCatalog::new()),
    };

    let state = Arc::new(AppState::new(catalog.clone(), &config));
    tracing::info!(
        provider = catalog.name(),
        current_year = state.recommender.current_year(),
        recent_years = state.recommender.recent_years(),
        "Catalog ready"
    );

    let app = create_router(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!(address = %bind_addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
