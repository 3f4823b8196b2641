use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use clap::Parser;
use common::{AppState, Config};
use serde_json::json;
use std::sync::Arc;
use store::Store;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transactions::service::TransactionService;

mod handlers;


#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Load Config from CLI args
    let config = Config::parse();

    // 3. In-memory store, seeded with initial demo data
    let state = Arc::new(AppState {
        store: Store::new(config.seed),
        config: config.clone(),
    });
    let seeded = TransactionService::regenerate(&state.store, 15, Utc::now())?;
    tracing::info!("Generated {} sample transactions", seeded.len());

    // 4. Routing
    let app = build_router(state);

    // 5. Start Server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::<Arc<AppState>>::new()
        .route("/user/setup", post(handlers::setup::setup_user))
        .route("/health", get(health))
        .merge(transactions::handler::transactions_router(state.clone()))
        .merge(analytics::handler::analytics_router(state.clone()))
        .merge(budget::handler::budget_router(state.clone()))
        .merge(tips::handler::tips_router(state.clone()))
        .with_state(state)
        // The mobile clients are served from a different origin in dev.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "Micro-Investment Advisor API is running",
        "timestamp": Utc::now(),
    }))
}
