use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod dataset;
mod error;
mod handlers;
mod models;

use crate::config::Config;
use crate::dataset::DatasetStore;

/// Shared application state, cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<DatasetStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mock_data_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Mock Data Service  ·  Rust + Axum   ║");
    info!("║  CRM customers · Inventory products  ║");
    info!("╚══════════════════════════════════════╝");

    // The fixture must fully load before anything is served.
    let dataset = DatasetStore::load().context("startup aborted: bundled dataset unusable")?;
    info!(
        customers = dataset.customers().len(),
        products = dataset.products().len(),
        "Dataset loaded"
    );

    let state = AppState {
        dataset: Arc::new(dataset),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!("Read endpoints: GET http://{}/customers  ·  GET http://{}/products", addr, addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Read-only dataset endpoints ─────────────────────────────────────
        .route("/customers", get(handlers::customers::list_customers))
        .route("/products", get(handlers::products::list_products))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
