//! Annuaire Server - Coiffeur directory API.
//!
//! This binary serves the directory API and the static browser client on
//! port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON endpoints under `/api`
//! - `SQLite` record store via sqlx (single `coiffeurs` table)
//! - Static client assets served from a configurable directory
//! - A single process-wide login flag shared by every client

#![cfg_attr(not(test), forbid(unsafe_code))]

use annuaire_server::config::ServerConfig;
use annuaire_server::state::AppState;
use annuaire_server::{db, routes};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "annuaire_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // Bring the record store schema up to date
    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    // Build application state
    let static_dir = config.static_dir.clone();
    let state = AppState::new(config.clone(), pool);

    // Build router: API routes plus the static browser client
    let app = routes::routes()
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("annuaire server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
