//! Feedsmith API Server
//!
//! Admin-defined custom feeds served as public read-only JSON endpoints.
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns: the sanitizer/flattener core is pure, the HTTP and Postgres
//! layers are thin adapters around it.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresFeedRepository;
use app::FeedService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<PostgresFeedRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,feedsmith_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Feedsmith API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters and services
    let feed_repo = Arc::new(PostgresFeedRepository::new(db));
    let feed_service = Arc::new(FeedService::new(feed_repo));

    let state = AppState { feed_service };

    // Rate limiting for the public read endpoint: 10 req/sec sustained,
    // burst of 20, keyed by client IP from the socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from a proxy)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(10)
            .burst_size(20)
            .finish()
            .context("failed to build governor config")?,
    );

    // Public read endpoint, rate-limited
    let public_routes = Router::new()
        .route("/feeds/:slug", get(handlers::get_feed))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Public feed reads
        .merge(public_routes)
        // Admin endpoints (auth delegated to the hosting deployment)
        .route(
            "/admin/feeds",
            get(handlers::list_feeds).post(handlers::create_feed),
        )
        .route(
            "/admin/feeds/:id",
            get(handlers::get_feed_detail)
                .put(handlers::update_feed)
                .delete(handlers::delete_feed),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
