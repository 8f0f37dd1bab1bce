//! HTTP route handlers for the coiffeur directory API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (verifies the store)
//!
//! # Records
//! GET  /api/allCoiffeurs          - All records, or substring search via ?searchTerm=
//! GET  /api/coiffeurs             - First page of the name-sorted listing
//! GET  /api/coiffeurs/{page}      - One page (10 records, ordered by nom)
//! PUT  /api/coiffeurs/{name}      - Update every record whose nom matches
//! POST /api/addCoiffeur           - Insert a record, returns its identity
//!
//! # Session
//! POST /api/login                 - Verify credentials, set the shared flag
//! GET  /api/isLoggedIn            - Current flag value
//! GET  /api/logout                - Clear the shared flag
//! ```
//!
//! The login flag gates nothing server-side: the browser client hides its
//! edit controls, but the record endpoints accept writes regardless.

pub mod auth;
pub mod coiffeurs;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the coiffeur record routes router.
pub fn coiffeur_routes() -> Router<AppState> {
    Router::new()
        .route("/allCoiffeurs", get(coiffeurs::all))
        .route("/coiffeurs", get(coiffeurs::first_page))
        // One path segment serves both reads (page number) and writes
        // (record name), disambiguated by method.
        .route(
            "/coiffeurs/{param}",
            get(coiffeurs::page).put(coiffeurs::update),
        )
        .route("/addCoiffeur", post(coiffeurs::add))
}

/// Create the session routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/isLoggedIn", get(auth::is_logged_in))
        .route("/logout", get(auth::logout))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/api", coiffeur_routes().merge(session_routes()))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies record store connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
